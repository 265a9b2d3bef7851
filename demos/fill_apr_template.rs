use anyhow::Result;
use apr_form_filler::{blank_apr_mapping, FormFiller, FormSections};

fn main() -> Result<()> {
    let template = blank_apr_mapping();

    let mut filler = FormFiller::new();
    let filled = filler.fill(&template)?;

    let sections = FormSections::from_mapping(&filled);
    println!("{}", sections.to_markdown());
    println!(
        "Populated {} of {} fields",
        sections.total_fields(),
        filled.len()
    );

    Ok(())
}
