//! Print the OpenAPI document as JSON.

use tripmates_backend::doc::ApiDoc;
use utoipa::OpenApi;

fn main() -> std::io::Result<()> {
    let json = ApiDoc::openapi()
        .to_pretty_json()
        .map_err(|e| std::io::Error::other(format!("failed to serialise OpenAPI document: {e}")))?;
    println!("{json}");
    Ok(())
}
