pub mod core {
    pub mod config;
    pub mod error;
    pub mod state;
    pub mod routes;
    pub mod startup;
    pub mod tracing_init;
}

pub mod handlers {
    pub mod fallback;
    pub mod health;
    pub mod login;
    pub mod protected;
    pub mod register;
}

pub mod models {
    pub mod auth;
    pub mod user;
}

pub mod security {
    pub mod bearer;
    pub mod password;
    pub mod tokens;
}

pub mod service {
    pub mod credentials;
}

pub mod stores {
    pub mod memory_store;
    pub mod sqlite_store;
    pub mod user_store;
}

pub mod utils {
    pub mod time;
}

pub mod validation {
    pub mod credentials;
}
