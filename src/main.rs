fn main() -> anyhow::Result<()> {
    hark::app_core::Hark::new().run()?;
    Ok(())
}
