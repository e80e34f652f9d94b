use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// The cities currently served by the marketplace.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum City {
    #[serde(rename = "Salvador")]
    Salvador,
    #[serde(rename = "Simões Filho")]
    SimoesFilho,
    #[serde(rename = "Lauro de Freitas")]
    LauroDeFreitas,
}

impl City {
    pub const ALL: [City; 3] = [City::Salvador, City::SimoesFilho, City::LauroDeFreitas];

    /// Neighborhoods registered for this city. A listing's neighborhood must
    /// be one of these.
    pub fn neighborhoods(&self) -> &'static [&'static str] {
        match self {
            City::Salvador => &[
                "Pituba",
                "Barra",
                "Imbuí",
                "Caminho das Árvores",
                "Itapuã",
                "Stella Maris",
                "Rio Vermelho",
                "Graça",
                "Liberdade",
                "Cajazeiras",
                "Brotas",
                "Cabula",
                "Paripe",
                "São Caetano",
            ],
            City::SimoesFilho => &[
                "Centro",
                "Cia I",
                "Cia II",
                "Ponto Parada",
                "Mapele",
                "Km 25",
                "Vida Nova",
                "Eucalipto",
                "Pitanguinha",
            ],
            City::LauroDeFreitas => &[
                "Vilas do Atlântico",
                "Ipitanga",
                "Buraquinho",
                "Miragem",
                "Estrada do Coco",
                "Portão",
                "Areia Branca",
                "Itinga",
                "Loteamento Miragem",
                "Vida Nova",
            ],
        }
    }

    pub fn has_neighborhood(&self, neighborhood: &str) -> bool {
        self.neighborhoods().contains(&neighborhood)
    }
}

impl Display for City {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let city = match self {
            City::Salvador => "Salvador",
            City::SimoesFilho => "Simões Filho",
            City::LauroDeFreitas => "Lauro de Freitas",
        };
        write!(f, "{}", city)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_served_city_has_registered_neighborhoods() {
        for city in City::ALL {
            assert!(!city.neighborhoods().is_empty(), "city {}", city);
        }
    }

    #[test]
    fn serde_names_match_the_display_names() {
        for city in City::ALL {
            let json = serde_json::to_string(&city).unwrap();
            assert_eq!(json, format!("\"{}\"", city));
            let parsed: City = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, city);
        }
    }
}
