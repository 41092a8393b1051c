use anyhow::Result;

use holdr::domain::services::HolderGenerator;

pub fn cmd_class_name(name: &str) -> Result<()> {
    println!("{}", HolderGenerator::class_name_for(name));
    Ok(())
}
