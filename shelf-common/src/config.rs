//! API location and endpoint paths

/// Origin used when no override is compiled in
pub const DEFAULT_API_ORIGIN: &str = "https://localhost:7153";

/// Browser storage key holding the logged-in username
pub const SESSION_STORAGE_KEY: &str = "username";

/// Cover shown for books without an image
pub const PLACEHOLDER_COVER_URL: &str =
    "https://static.vecteezy.com/vite/assets/photo-masthead-375-BoK_p8LG.webp";

/// Where the bookstore API lives
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub origin: String,
}

impl ApiConfig {
    pub fn new(origin: impl Into<String>) -> Self {
        let origin = origin.into();
        Self {
            origin: origin.trim_end_matches('/').to_string(),
        }
    }

    /// Build-time override via `BOOKSHELF_API_ORIGIN`, else the default origin
    pub fn from_build_env() -> Self {
        match option_env!("BOOKSHELF_API_ORIGIN") {
            Some(origin) if !origin.trim().is_empty() => Self::new(origin.trim()),
            _ => Self::default(),
        }
    }

    pub fn endpoints(&self) -> Endpoints {
        Endpoints {
            origin: self.origin.clone(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_ORIGIN)
    }
}

/// URL builder for every route the client calls
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoints {
    origin: String,
}

impl Endpoints {
    pub fn books(&self) -> String {
        format!("{}/api/books", self.origin)
    }

    pub fn book(&self, id: &str) -> String {
        format!("{}/api/books/{}", self.origin, urlencoding::encode(id))
    }

    pub fn login(&self) -> String {
        format!("{}/api/auth/login", self.origin)
    }

    pub fn signup(&self) -> String {
        format!("{}/api/auth/signup", self.origin)
    }

    pub fn comments(&self) -> String {
        format!("{}/api/Comments", self.origin)
    }

    pub fn comments_for_book(&self, book_id: &str) -> String {
        self.comment(book_id)
    }

    /// Single comment (PUT/DELETE); shares its shape with the per-book listing
    pub fn comment(&self, id: &str) -> String {
        format!("{}/api/Comments/{}", self.origin, urlencoding::encode(id))
    }
}
