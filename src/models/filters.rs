/// Criterio de orden del listado
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum SortBy {
    /// Mayor descuento primero
    #[default]
    Discount,
    /// Menor precio primero
    Price,
}

impl SortBy {
    /// Valor del `<option>` correspondiente
    pub fn as_value(self) -> &'static str {
        match self {
            Self::Discount => "discount",
            Self::Price => "price",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        match value {
            "discount" => Some(Self::Discount),
            "price" => Some(Self::Price),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Discount => "Ordenar por descuento",
            Self::Price => "Ordenar por precio",
        }
    }
}

/// Foto del estado de filtros en el momento del render
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct DealFilters {
    pub min_discount: i64,
    pub sort_by: SortBy,
    pub show_favorites: bool,
}
