use serde::ser::{Serialize, SerializeMap, Serializer};

use super::OfferTerms;

/// Offers assembled for one customer: institution name → modality name → terms.
///
/// Institutions and modalities keep the order the bureau discovered them in,
/// which is the order ranking ties fall back to. Encodes as a nested JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OfferCatalog {
    institutions: Vec<InstitutionOffers>,
}

/// Offers of a single institution, keyed by modality name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstitutionOffers {
    pub name: String,
    offers: Vec<ModalityOffer>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalityOffer {
    pub modality_name: String,
    pub terms: OfferTerms,
}

/// One (institution, modality, terms) triple, borrowed from a catalog
#[derive(Debug, Clone, Copy)]
pub struct CatalogEntry<'a> {
    pub institution_name: &'a str,
    pub modality_name: &'a str,
    pub terms: &'a OfferTerms,
}

impl OfferCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens the slot for an institution and returns it empty.
    /// A name seen before keeps its position but loses its previous offers.
    pub fn insert_institution(&mut self, name: impl Into<String>) -> &mut InstitutionOffers {
        let name = name.into();
        match self.institutions.iter().position(|i| i.name == name) {
            Some(index) => {
                let slot = &mut self.institutions[index];
                slot.offers.clear();
                slot
            }
            None => {
                self.institutions.push(InstitutionOffers {
                    name,
                    offers: Vec::new(),
                });
                let last = self.institutions.len() - 1;
                &mut self.institutions[last]
            }
        }
    }

    /// Adds terms under an institution, creating the institution if needed
    pub fn insert(
        &mut self,
        institution: impl Into<String>,
        modality_name: impl Into<String>,
        terms: OfferTerms,
    ) {
        let institution = institution.into();
        let index = match self.institutions.iter().position(|i| i.name == institution) {
            Some(index) => index,
            None => {
                self.institutions.push(InstitutionOffers {
                    name: institution,
                    offers: Vec::new(),
                });
                self.institutions.len() - 1
            }
        };
        self.institutions[index].insert(modality_name, terms);
    }

    pub fn institution(&self, name: &str) -> Option<&InstitutionOffers> {
        self.institutions.iter().find(|i| i.name == name)
    }

    pub fn institutions(&self) -> &[InstitutionOffers] {
        &self.institutions
    }

    pub fn get(&self, institution: &str, modality: &str) -> Option<&OfferTerms> {
        self.institution(institution)?.get(modality)
    }

    /// Every offer in discovery order
    pub fn entries(&self) -> impl Iterator<Item = CatalogEntry<'_>> {
        self.institutions.iter().flat_map(|institution| {
            institution.offers.iter().map(move |offer| CatalogEntry {
                institution_name: &institution.name,
                modality_name: &offer.modality_name,
                terms: &offer.terms,
            })
        })
    }

    /// Number of (institution, modality) pairs holding terms
    pub fn offer_count(&self) -> usize {
        self.institutions.iter().map(|i| i.offers.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.institutions.is_empty()
    }
}

impl InstitutionOffers {
    /// Stores terms under a modality name, replacing any earlier terms for it
    pub fn insert(&mut self, modality_name: impl Into<String>, terms: OfferTerms) {
        let modality_name = modality_name.into();
        match self
            .offers
            .iter_mut()
            .find(|o| o.modality_name == modality_name)
        {
            Some(existing) => existing.terms = terms,
            None => self.offers.push(ModalityOffer {
                modality_name,
                terms,
            }),
        }
    }

    pub fn get(&self, modality_name: &str) -> Option<&OfferTerms> {
        self.offers
            .iter()
            .find(|o| o.modality_name == modality_name)
            .map(|o| &o.terms)
    }

    pub fn offers(&self) -> &[ModalityOffer] {
        &self.offers
    }

    pub fn len(&self) -> usize {
        self.offers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offers.is_empty()
    }
}

impl Serialize for OfferCatalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.institutions.len()))?;
        for institution in &self.institutions {
            map.serialize_entry(&institution.name, institution)?;
        }
        map.end()
    }
}

impl Serialize for InstitutionOffers {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.offers.len()))?;
        for offer in &self.offers {
            map.serialize_entry(&offer.modality_name, &offer.terms)?;
        }
        map.end()
    }
}
