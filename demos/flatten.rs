//! Flatten a TOML document into property paths.
//!
//! Run with: cargo run --example flatten [path/to/file.toml]

use std::error::Error;
use toml_property_source::loader::{BytesResource, FileResource, Resource};
use toml_property_source::{PropertySourceLoader, TomlPropertySourceLoader};

const SAMPLE: &str = r#"
[server]
host = "localhost"
ports = [8080, 8443]

[[server.routes]]
path = "/api"
upstream = "backend"

[[server.routes]]
path = "/static"
upstream = "files"
"#;

fn main() -> Result<(), Box<dyn Error>> {
    let resource: Box<dyn Resource> = match std::env::args().nth(1) {
        Some(path) => Box::new(FileResource::new(path)),
        None => Box::new(BytesResource::new("sample", SAMPLE)),
    };

    let loader = TomlPropertySourceLoader::new();
    let sources = loader.load("demo", resource.as_ref())?;

    match sources.first() {
        Some(source) => {
            for (path, value) in source.properties() {
                println!("{} = {}", path, value);
            }
        }
        None => println!("nothing to load from {}", resource.description()),
    }

    Ok(())
}
