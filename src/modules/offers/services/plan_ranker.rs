use rust_decimal::{Decimal, MathematicalOps};
use tracing::{debug, warn};

use crate::modules::offers::models::{CatalogEntry, OfferCatalog, RankedPlan};

/// How many plans a ranked consultation returns at most
pub const MAX_RANKED_PLANS: usize = 3;

/// Third pipeline stage: prices every eligible offer and keeps the cheapest
pub struct PlanRanker;

impl PlanRanker {
    /// Rank the catalog for a concrete request.
    ///
    /// Offers whose amount or installment range does not contain the request
    /// are dropped. Survivors are ordered by total payable, cheapest first;
    /// equal totals keep catalog (discovery) order. At most
    /// [`MAX_RANKED_PLANS`] plans are returned and an empty result is valid.
    pub fn rank(
        catalog: &OfferCatalog,
        requested_amount: Decimal,
        installment_count: u32,
    ) -> Vec<RankedPlan> {
        let mut plans: Vec<RankedPlan> = catalog
            .entries()
            .filter_map(|entry| Self::evaluate(entry, requested_amount, installment_count))
            .collect();

        let eligible = plans.len();

        // sort_by is stable, which keeps discovery order for ties
        plans.sort_by(|a, b| a.total_payable.cmp(&b.total_payable));
        plans.truncate(MAX_RANKED_PLANS);

        debug!(
            requested_amount = %requested_amount,
            installment_count,
            offers = catalog.offer_count(),
            eligible,
            returned = plans.len(),
            "Plans ranked"
        );

        plans
    }

    /// Price one offer, or `None` when it cannot serve the request
    pub fn evaluate(
        entry: CatalogEntry<'_>,
        requested_amount: Decimal,
        installment_count: u32,
    ) -> Option<RankedPlan> {
        let terms = entry.terms;
        if !terms.covers(requested_amount, installment_count) {
            return None;
        }

        let rate = terms.monthly_interest_rate;
        let priced = amortized_installment(requested_amount, rate, installment_count).and_then(
            |installment| {
                installment
                    .checked_mul(Decimal::from(installment_count))
                    .map(|total| (installment, total))
            },
        );

        let Some((installment_amount, total_payable)) = priced else {
            warn!(
                institution = %entry.institution_name,
                modality = %entry.modality_name,
                requested_amount = %requested_amount,
                installment_count,
                rate = %rate,
                "Offer excluded: amortization overflowed decimal range"
            );
            return None;
        };

        Some(RankedPlan {
            institution_name: entry.institution_name.to_string(),
            modality_name: entry.modality_name.to_string(),
            total_payable: total_payable.normalize(),
            requested_amount,
            installment_amount: installment_amount.normalize(),
            monthly_interest_rate: rate,
            installment_count,
        })
    }
}

/// Fixed payment that repays `principal` over `periods` at `rate` per period:
/// `P · r / (1 − (1+r)^−n)`.
///
/// The discount factor `(1+r)^−n` shrinks toward zero on long terms instead of
/// growing past the decimal range, so the payment tends to `P · r`. A zero rate
/// amortizes linearly (`P / n`). Returns `None` for zero periods or when the
/// principal itself is too large to price.
pub fn amortized_installment(principal: Decimal, rate: Decimal, periods: u32) -> Option<Decimal> {
    if periods == 0 {
        return None;
    }

    let n = Decimal::from(periods);
    if rate.is_zero() {
        return principal.checked_div(n);
    }

    let discount = Decimal::ONE
        .checked_div(Decimal::ONE.checked_add(rate)?)?
        .checked_powu(u64::from(periods))?;
    let denominator = Decimal::ONE.checked_sub(discount)?;

    // A rate too small to register after 28 digits of precision is a zero rate
    if denominator.is_zero() {
        return principal.checked_div(n);
    }

    principal.checked_mul(rate)?.checked_div(denominator)
}
