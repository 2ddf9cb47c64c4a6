//! Routing table
//!
//! The HTTP surface is declared as plain data. [`create_router`] walks the
//! table to build the axum router, and the API description is checked
//! against the same entries.
//!
//! [`create_router`]: super::create_router

use axum::routing::{on, MethodFilter, MethodRouter};

use super::{handlers, AppState};

/// HTTP methods used by the service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }

    fn filter(self) -> MethodFilter {
        match self {
            HttpMethod::Get => MethodFilter::GET,
            HttpMethod::Post => MethodFilter::POST,
            HttpMethod::Put => MethodFilter::PUT,
            HttpMethod::Delete => MethodFilter::DELETE,
        }
    }
}

/// Operations the service exposes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Health,
    Liveness,
    Readiness,
    ListCharacters,
    CreateCharacter,
    GetCharacter,
    UpdateCharacter,
    DeleteCharacter,
}

/// One entry of the routing table.
///
/// Paths use `{name}` placeholders for captured segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub method: HttpMethod,
    pub path: &'static str,
    pub operation: Operation,
}

/// Path prefix of the versioned API
pub const API_V1: &str = "/api/v1";

pub const ROUTES: &[Route] = &[
    Route {
        method: HttpMethod::Get,
        path: "/health",
        operation: Operation::Health,
    },
    Route {
        method: HttpMethod::Get,
        path: "/health/live",
        operation: Operation::Liveness,
    },
    Route {
        method: HttpMethod::Get,
        path: "/health/ready",
        operation: Operation::Readiness,
    },
    Route {
        method: HttpMethod::Get,
        path: "/api/v1/characters",
        operation: Operation::ListCharacters,
    },
    Route {
        method: HttpMethod::Post,
        path: "/api/v1/characters",
        operation: Operation::CreateCharacter,
    },
    Route {
        method: HttpMethod::Get,
        path: "/api/v1/characters/{id}",
        operation: Operation::GetCharacter,
    },
    Route {
        method: HttpMethod::Put,
        path: "/api/v1/characters/{id}",
        operation: Operation::UpdateCharacter,
    },
    Route {
        method: HttpMethod::Delete,
        path: "/api/v1/characters/{id}",
        operation: Operation::DeleteCharacter,
    },
];

impl Route {
    /// The path in axum's capture syntax (`/:id` rather than `/{id}`)
    pub fn axum_path(&self) -> String {
        self.path
            .split('/')
            .map(|segment| match segment.strip_prefix('{').and_then(|s| s.strip_suffix('}')) {
                Some(name) => format!(":{name}"),
                None => segment.to_string(),
            })
            .collect::<Vec<_>>()
            .join("/")
    }

    pub(super) fn method_router(&self) -> MethodRouter<AppState> {
        let filter = self.method.filter();
        match self.operation {
            Operation::Health => on(filter, handlers::health),
            Operation::Liveness => on(filter, handlers::liveness),
            Operation::Readiness => on(filter, handlers::readiness),
            Operation::ListCharacters => on(filter, handlers::list_characters),
            Operation::CreateCharacter => on(filter, handlers::create_character),
            Operation::GetCharacter => on(filter, handlers::get_character),
            Operation::UpdateCharacter => on(filter, handlers::update_character),
            Operation::DeleteCharacter => on(filter, handlers::delete_character),
        }
    }
}
