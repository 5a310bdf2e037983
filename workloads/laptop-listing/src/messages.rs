//! User-facing strings per locale.

use rock_catalog::config::Locale;
use rock_catalog::SearchError;

/// Fixed strings of the listing page.
#[derive(Debug, Clone, Copy)]
pub struct Messages {
    pub heading: &'static str,
    pub loading: &'static str,
    pub loading_detail: &'static str,
    pub error_title: &'static str,
    pub retry: &'static str,
    pub all_categories: &'static str,
    pub ai_results_for: &'static str,
    pub clear_search: &'static str,
    pub search_placeholder: &'static str,
    pub search_button: &'static str,
    pub searching: &'static str,
    pub auth_pending: &'static str,
    pub empty_query: &'static str,
    pub sign_in_required: &'static str,
    pub empty_catalog: &'static str,
    pub empty_category: &'static str,
    pub show_all: &'static str,
    pub empty_ai: &'static str,
    pub processor: &'static str,
    pub ram: &'static str,
    pub storage: &'static str,
    pub screen: &'static str,
    pub graphics: &'static str,
    pub details: &'static str,
    pub previous: &'static str,
    pub next: &'static str,
    pub pagination_label: &'static str,
}

const ES: Messages = Messages {
    heading: "Nuestros Portátiles",
    loading: "Cargando productos...",
    loading_detail: "Conectando con la API...",
    error_title: "Error al cargar los productos",
    retry: "Reintentar",
    all_categories: "Todos",
    ai_results_for: "Resultados de la IA para",
    clear_search: "Limpiar búsqueda",
    search_placeholder: "Describe el portátil que buscas...",
    search_button: "Buscar con IA",
    searching: "Buscando...",
    auth_pending: "Comprobando sesión...",
    empty_query: "Describe el portátil que buscas antes de buscar",
    sign_in_required: "Inicia sesión para usar la búsqueda con IA",
    empty_catalog: "No hay portátiles disponibles.",
    empty_category: "No hay portátiles en la categoría",
    show_all: "Ver todas las categorías",
    empty_ai: "La IA no encontró portátiles para",
    processor: "Procesador",
    ram: "RAM",
    storage: "Almacenamiento",
    screen: "Pantalla",
    graphics: "Gráficos",
    details: "Ver detalles",
    previous: "Anterior",
    next: "Siguiente",
    pagination_label: "Paginación de portátiles",
};

const EN: Messages = Messages {
    heading: "Our Laptops",
    loading: "Loading laptops...",
    loading_detail: "Connecting to the API...",
    error_title: "Could not load the laptops",
    retry: "Try again",
    all_categories: "All",
    ai_results_for: "AI results for",
    clear_search: "Clear search",
    search_placeholder: "Describe the laptop you are looking for...",
    search_button: "Search with AI",
    searching: "Searching...",
    auth_pending: "Checking your session...",
    empty_query: "Describe the laptop you are looking for first",
    sign_in_required: "Sign in to use the AI search",
    empty_catalog: "No laptops available.",
    empty_category: "No laptops in category",
    show_all: "Show all categories",
    empty_ai: "The AI found no laptops for",
    processor: "Processor",
    ram: "RAM",
    storage: "Storage",
    screen: "Screen",
    graphics: "Graphics",
    details: "View details",
    previous: "Previous",
    next: "Next",
    pagination_label: "Laptop pagination",
};

impl Messages {
    pub fn for_locale(locale: Locale) -> &'static Messages {
        match locale {
            Locale::Es => &ES,
            Locale::En => &EN,
        }
    }

    /// Inline text for a search error. Locally rejected searches use the
    /// page's locale; server errors keep their own message.
    pub fn search_error(&self, error: &SearchError) -> String {
        match error {
            SearchError::EmptyQuery => self.empty_query.to_string(),
            SearchError::SignInRequired => self.sign_in_required.to_string(),
            other => other.to_string(),
        }
    }

    /// "Showing 1-6 of 14" style summary.
    pub fn showing(locale: Locale, start: usize, end: usize, total: usize) -> String {
        match locale {
            Locale::Es => format!("Mostrando {}-{} de {} portátiles", start, end, total),
            Locale::En => format!("Showing {}-{} of {} laptops", start, end, total),
        }
    }
}
