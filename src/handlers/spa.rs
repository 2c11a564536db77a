use std::path::PathBuf;

use actix_files::{Files, NamedFile};
use actix_web::dev::{fn_service, ServiceRequest, ServiceResponse};

use crate::errors::AppError;

/// Serves the built client. Paths that do not name a file fall through to
/// `index.html` so the client can route them itself.
pub fn client_bundle(dir: PathBuf) -> Files {
    let index = dir.join("index.html");
    if !index.is_file() {
        log::warn!("No client build found at {}", dir.display());
    }

    Files::new("/", dir)
        .index_file("index.html")
        .default_handler(fn_service(move |req: ServiceRequest| {
            let index = index.clone();
            async move {
                let (req, _) = req.into_parts();
                let file = NamedFile::open_async(&index).await.map_err(|e| {
                    log::warn!("Client index {} unavailable: {}", index.display(), e);
                    AppError::NotFound
                })?;
                let res = file.into_response(&req);
                Ok::<_, actix_web::Error>(ServiceResponse::new(req, res))
            }
        }))
}
