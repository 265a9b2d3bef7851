use anyhow::Result;
use apr_form_filler::llm::{GeminiClient, IntelligentFormFiller};
use apr_form_filler::FormMapping;

#[tokio::main]
async fn main() -> Result<()> {
    let api_key = std::env::var("GEMINI_API_KEY")?;

    let mut form = FormMapping::new();
    form.insert("company_name", "TechGlobal Solutions Pvt Ltd");
    form.insert("uin", "");
    form.insert("from_date", "");
    form.insert("to_date", "");

    let client = GeminiClient::new(api_key);
    let filler = IntelligentFormFiller::new(client, "gemini-1.5-flash");
    let filled = filler.fill(&form).await?;

    for (field, value) in filled.iter() {
        println!("{}: {}", field, value);
    }

    Ok(())
}
