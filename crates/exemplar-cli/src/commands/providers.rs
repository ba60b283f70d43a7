//! Providers command - registry inspection

use anyhow::Result;
use colored::Colorize;
use exemplar_core::provider;

pub async fn run() -> Result<()> {
    println!("{}", "Known providers:".cyan().bold());
    println!();

    for descriptor in provider::all() {
        println!("{} ({})", descriptor.display_name.bold(), descriptor.id);
        println!("   Directory: {}", descriptor.default_directory);
        println!("   Patterns:  {}", descriptor.patterns.join(", ").dimmed());
        println!("   Example:   {}", descriptor.example_base_name);
        println!();
    }

    Ok(())
}
