use crate::cli;
use favicon_core::{html::DOWNLOADS_PAGE_FILENAME, Generated, Generator};

/// Generates the favicon set. Failures are reported on stdout together with a
/// fallback hint and never turn into an error exit.
pub fn generate(args: &cli::Cli) {
    println!("🎈 Generating balloon favicon files...");

    let generator = Generator::new(&args.output_dir);
    match generator.run_with(|file| println!("✓ Created {}", file)) {
        Ok(generated) => print_summary(&generated),
        Err(err) => {
            tracing::debug!("favicon generation failed: {:?}", err);
            println!("❌ Error: {}", err);
            println!("Fallback: Use favicon-generator.html in your browser.");
        }
    }
}

fn print_summary(generated: &Generated) {
    println!();
    println!(
        "🎈 Successfully generated {} favicon files!",
        generated.files.len()
    );
    println!();
    println!("Generated files:");
    for file in &generated.files {
        println!("  - {}", file);
    }
    println!();
    println!(
        "📱 Open '{}' in your browser to download PNG files!",
        generated.output_dir.join(DOWNLOADS_PAGE_FILENAME).display()
    );
}
