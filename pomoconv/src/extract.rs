use definitions::CountsData;

pub trait Extract {
    fn extract<W: std::io::Write>(&self, wtr: &mut W) -> std::io::Result<()>;
}

impl Extract for CountsData {
    /// Write the discrete-trait alignment, one `name state state ...` line
    /// per taxon, in the input order.
    fn extract<W: std::io::Write>(&self, wtr: &mut W) -> std::io::Result<()> {
        for taxon in self.taxa.iter() {
            writeln!(wtr, "{}", taxon)?;
        }
        Ok(())
    }
}
