//! Send one prompt to ZhugeShenma and print the raw response.
//!
//! ```text
//! ZHUGESHENMA_API_KEY=... RUST_LOG=debug cargo run --example chat -- "What is 2+2?"
//! ```

use log::{error, info};
use shenma::{ModelClient, ModelOptions, ModelType, ShenmaClient, ShenmaConfig};

#[tokio::main]
async fn main()
{   env_logger::init();

    let prompt = std::env::args().skip(1).collect::<Vec<_>>().join(" ");
    let prompt = if prompt.is_empty() { "Say hello".to_string() } else { prompt };

    let client = ShenmaClient::from_config(&ShenmaConfig::from_env());
    info!("Sending prompt to {}", client.endpoint());

    let request = match client.convert_inputs(
      prompt.into(), &ModelOptions::default(), ModelType::Llm
    )
    {   Ok(request) => request
      , Err(e) => {
          error!("{}", e);
          std::process::exit(2);
        }
    };

    match client.acall(&request, ModelType::Llm).await
    {   Ok(response) => {
          match serde_json::to_string_pretty(&response)
          {   Ok(text) => println!("{}", text)
            , Err(_) => println!("{}", response)
          }
        }
      , Err(e) => {
          error!("{}", e);
          std::process::exit(1);
        }
    }
}
