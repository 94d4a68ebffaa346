use definitions::CountsData;

pub trait Stats {
    fn stats<W: std::io::Write>(&self, wtr: W, virtual_size: usize) -> std::io::Result<()>;
}

impl Stats for CountsData {
    fn stats<W: std::io::Write>(&self, mut wtr: W, virtual_size: usize) -> std::io::Result<()> {
        writeln!(&mut wtr, "Input File:{}", self.input_file)?;
        writeln!(&mut wtr, "Number of Alleles:{}", self.n_alleles)?;
        writeln!(&mut wtr, "Number of Sites:{}", self.n_sites())?;
        writeln!(&mut wtr, "Number of Virtual Individuals:{}", virtual_size)?;
        writeln!(
            &mut wtr,
            "Number of PoMo States:{}",
            self.state_space_size(virtual_size)
        )?;
        writeln!(&mut wtr, "Number of Taxa:{}", self.n_taxa())?;
        Ok(())
    }
}
