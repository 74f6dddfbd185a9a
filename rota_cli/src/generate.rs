use std::path::PathBuf;

use rota_sequencer::json::schema::{generate_json_schema, generate_request_json_schema};

pub fn run(input: bool, out: Option<PathBuf>) -> Result<(), anyhow::Error> {
    let schema = if input {
        generate_request_json_schema()?
    } else {
        generate_json_schema()?
    };

    match out {
        Some(out) => {
            if let Some(parent) = out.parent() {
                std::fs::create_dir_all(parent)?;
            }

            std::fs::write(out, schema)?;
        }
        None => println!("{}", schema),
    }

    Ok(())
}
