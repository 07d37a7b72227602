/// Backend por defecto (sobrescribible con `API_BASE` en tiempo de compilación)
pub const DEFAULT_API_BASE: &str = "https://steamdealsbackend.onrender.com";

/// Ofertas por página que se piden a `/deals`
pub const DEFAULT_PAGE_SIZE: u32 = 16;

/// Vida visible de una notificación
pub const DEFAULT_NOTIFICATION_MS: u32 = 2000;

/// Clave de localStorage con el bearer token
pub const TOKEN_STORAGE_KEY: &str = "token";

/// Caché local de favoritos de versiones anteriores (ya no es fuente de datos)
pub const LEGACY_FAVORITES_KEY: &str = "favorites";

/// Umbrales del selector de descuento mínimo
pub const MIN_DISCOUNT_OPTIONS: &[(i64, &str)] = &[
    (0, "Sin filtro"),
    (50, "50% o más"),
    (75, "75% o más"),
    (90, "90% o más"),
];
