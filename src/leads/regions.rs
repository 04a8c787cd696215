/// The administrative regions of the Federal District offered in the
/// form, plus the leading "Outro Estado" escape option for visitors
/// from outside the DF. The select never accepts free text, so this
/// list is the whole universe of `region` values.
pub const REGIONS: [&str; 36] = [
    "Outro Estado",
    "Plano Piloto",
    "Gama",
    "Taguatinga",
    "Brazlândia",
    "Sobradinho",
    "Planaltina",
    "Paranoá",
    "Núcleo Bandeirante",
    "Ceilândia",
    "Guará",
    "Cruzeiro",
    "Samambaia",
    "Santa Maria",
    "São Sebastião",
    "Recanto das Emas",
    "Lago Sul",
    "Riacho Fundo",
    "Lago Norte",
    "Candangolândia",
    "Águas Claras",
    "Riacho Fundo II",
    "Sudoeste/Octogonal",
    "Varjão",
    "Park Way",
    "SCIA (Estrutural)",
    "Sobradinho II",
    "Jardim Botânico",
    "Itapoã",
    "SIA",
    "Vicente Pires",
    "Fercal",
    "Sol Nascente/Pôr do Sol",
    "Arniqueira",
    "Arapoanga",
    "Água Quente",
];

pub fn is_region(value: &str) -> bool {
    REGIONS.iter().any(|region| *region == value)
}

#[cfg(test)]
mod tests {
    use super::{is_region, REGIONS};

    #[test]
    fn the_list_has_36_distinct_entries() {
        assert_eq!(REGIONS.len(), 36);
        for (i, region) in REGIONS.iter().enumerate() {
            assert!(
                !REGIONS[i + 1..].contains(region),
                "duplicate region: {region}"
            );
        }
    }

    #[test]
    fn escape_option_comes_first() {
        assert_eq!(REGIONS[0], "Outro Estado");
    }

    #[test]
    fn lookup_is_exact() {
        assert!(is_region("Plano Piloto"));
        assert!(is_region("Sol Nascente/Pôr do Sol"));
        assert!(!is_region("plano piloto"));
        assert!(!is_region(""));
    }
}
