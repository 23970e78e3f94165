use formwright::openai::OpenAiAdapterBuilder;
use formwright::{FormGenerator, GenerationRequest, GenerationSettings};

/// # Generate a form from the command line
///
/// Sends the description given as arguments through the full pipeline and
/// prints the validated fields as JSON.
///
/// ```bash
/// export GROQ_API_KEY=gsk_…      # mandatory
/// cargo run -p formwright --example generate_form -- "A conference signup form"
/// ```
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let query = std::env::args().skip(1).collect::<Vec<_>>().join(" ");

    let backend = OpenAiAdapterBuilder::new_from_env().build()?;
    let generator = FormGenerator::new(backend, GenerationSettings::default());

    let request = GenerationRequest::accept(query);
    let result = generator.generate(&request).await?;

    println!("request {} took {}", result.request_id, result.response_time());
    println!("{}", serde_json::to_string_pretty(&result.fields)?);

    Ok(())
}
