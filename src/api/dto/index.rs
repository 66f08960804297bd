//! DTO for the service landing page.

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct IndexResponse {
    pub message: &'static str,
    pub instructions: Instructions,
}

#[derive(Debug, Serialize)]
pub struct Instructions {
    pub shorten: &'static str,
    pub redirect: &'static str,
    pub stats: &'static str,
}
