use crate::phenotype::Phenotype;

/// Fitness is a count of satisfied constraints.
pub type Fitness = u32;

pub trait Challenge<Pheno: Phenotype> {
    fn score(&self, phenotype: &Pheno) -> Fitness;

    /// The score of a solved phenotype; evolution stops once it is reached.
    fn max_score(&self) -> Fitness;
}
