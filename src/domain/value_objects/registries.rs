use crate::domain::entities::plans::PlanEntity;

/// A service category together with the icon slug the UI renders for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryInfo {
    pub name: &'static str,
    pub icon: &'static str,
}

pub const CATEGORIES: [CategoryInfo; 11] = [
    CategoryInfo { name: "Manutenção", icon: "fa-screwdriver-wrench" },
    CategoryInfo { name: "Beleza", icon: "fa-sparkles" },
    CategoryInfo { name: "Aulas", icon: "fa-book-open-reader" },
    CategoryInfo { name: "Tecnologia", icon: "fa-laptop-code" },
    CategoryInfo { name: "Saúde", icon: "fa-stethoscope" },
    CategoryInfo { name: "Gastronomia", icon: "fa-utensils" },
    CategoryInfo { name: "Limpeza", icon: "fa-broom" },
    CategoryInfo { name: "Eventos", icon: "fa-camera-retro" },
    CategoryInfo { name: "Fretes", icon: "fa-truck-fast" },
    CategoryInfo { name: "Moda", icon: "fa-shirt" },
    CategoryInfo { name: "Pet", icon: "fa-paw" },
];

pub fn category_exists(name: &str) -> bool {
    CATEGORIES.iter().any(|category| category.name == name)
}

/// The seed catalog. Prices are in centavos.
pub fn initial_plans() -> Vec<PlanEntity> {
    vec![
        PlanEntity {
            id: "free".to_string(),
            name: "7 Dias Free".to_string(),
            price_minor: 0,
            duration_days: 7,
            desc: "Básico para quem está começando.".to_string(),
            icon: "fa-seedling".to_string(),
            max_photos: 1,
            highlight: false,
            benefits: vec![
                "Anúncio simples".to_string(),
                "1 foto na galeria".to_string(),
                "Suporte via Chatbot".to_string(),
            ],
        },
        PlanEntity {
            id: "monthly".to_string(),
            name: "Mensal".to_string(),
            price_minor: 1990,
            duration_days: 30,
            desc: "Visibilidade para impulsionar seu mês.".to_string(),
            icon: "fa-calendar-day".to_string(),
            max_photos: 1,
            highlight: false,
            benefits: vec![
                "Anúncio completo".to_string(),
                "Link redes sociais".to_string(),
                "IA Assistente de texto".to_string(),
            ],
        },
        PlanEntity {
            id: "quarterly".to_string(),
            name: "Trimestral".to_string(),
            price_minor: 4990,
            duration_days: 90,
            desc: "Ideal para estabilizar sua agenda.".to_string(),
            icon: "fa-layer-group".to_string(),
            max_photos: 3,
            highlight: false,
            benefits: vec![
                "Destaque regional".to_string(),
                "Até 3 fotos".to_string(),
                "IA Hub Pro básico".to_string(),
            ],
        },
        PlanEntity {
            id: "semiannual".to_string(),
            name: "Semestral".to_string(),
            price_minor: 8990,
            duration_days: 180,
            desc: "Profissionalismo por longo prazo.".to_string(),
            icon: "fa-gem".to_string(),
            max_photos: 5,
            highlight: false,
            benefits: vec![
                "Selo Prata".to_string(),
                "Prioridade média".to_string(),
                "IA Hub Pro completo".to_string(),
            ],
        },
        PlanEntity {
            id: "annual".to_string(),
            name: "Anual (Ouro)".to_string(),
            price_minor: 14990,
            duration_days: 365,
            desc: "Ouro: Máxima visibilidade e credibilidade.".to_string(),
            icon: "fa-crown".to_string(),
            max_photos: 10,
            highlight: true,
            benefits: vec![
                "Selo Ouro Verificado".to_string(),
                "Topo das buscas".to_string(),
                "Até 10 fotos".to_string(),
                "Assessoria de Marketing".to_string(),
            ],
        },
    ]
}
