pub fn run() -> anyhow::Result<()> {
    println!("sakuin {}", env!("CARGO_PKG_VERSION"));
    println!("In-memory full-text search with CJK bigram indexing");
    Ok(())
}
