//! Print the OpenAPI document as JSON.

use anyhow::Context;
use utoipa::OpenApi;
use webservice::api::ApiDoc;

fn main() -> anyhow::Result<()> {
    let json = ApiDoc::openapi()
        .to_pretty_json()
        .context("failed to render OpenAPI document")?;
    println!("{json}");
    Ok(())
}
