use std::fmt::Display;
use std::io::Write;
use std::marker::PhantomData;
use std::time::{Duration, Instant};

use super::{
    challenge::{Challenge, Fitness},
    options::{EvolutionOptions, LogLevel},
};
use crate::{
    error::{GeneticError, OptionExt, Result},
    phenotype::Phenotype,
    rng::RandomNumberGenerator,
    selection::SelectionStrategy,
    strategy::BreedStrategy,
};

/// Represents the result of an evolution, containing the best phenotype and its score.
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionResult<Pheno: Phenotype> {
    /// The best phenotype seen since the last restart.
    pub pheno: Pheno,
    /// The fitness score of the phenotype.
    pub score: Fitness,
    /// Generation counter when the run stopped; reset by every restart.
    pub generations: usize,
    /// Generations evaluated across all restarts.
    pub total_generations: usize,
    /// Number of stagnation restarts.
    pub restarts: usize,
    /// Wall-clock time since the run started.
    pub elapsed: Duration,
}

/// What a single call to [`Evolution::step`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationOutcome {
    /// The best-ever score reached the target; nothing was bred.
    Solved,
    /// A new generation replaced the population.
    Continued,
    /// The stagnation limit was hit and a fresh random population was drawn.
    Restarted,
}

/// Manages the evolution process using a breeding strategy, a selection strategy
/// and a challenge.
#[derive(Debug, Clone)]
pub struct EvolutionLauncher<Pheno, Strategy, Select, Chall>
where
    Pheno: Phenotype,
    Strategy: BreedStrategy<Pheno>,
    Select: SelectionStrategy<Pheno>,
    Chall: Challenge<Pheno>,
{
    strategy: Strategy,
    selection: Select,
    challenge: Chall,
    _marker: PhantomData<Pheno>,
}

impl<Pheno, Strategy, Select, Chall> EvolutionLauncher<Pheno, Strategy, Select, Chall>
where
    Pheno: Phenotype + Display,
    Strategy: BreedStrategy<Pheno>,
    Select: SelectionStrategy<Pheno>,
    Chall: Challenge<Pheno>,
{
    /// Creates a new `EvolutionLauncher` instance.
    ///
    /// # Arguments
    ///
    /// * `strategy` - Breeds the next generation from the mating pool.
    /// * `selection` - Builds the mating pool from the scored population.
    /// * `challenge` - Scores phenotypes and defines the target score.
    pub fn new(strategy: Strategy, selection: Select, challenge: Chall) -> Self {
        Self {
            strategy,
            selection,
            challenge,
            _marker: PhantomData,
        }
    }

    pub fn challenge(&self) -> &Chall {
        &self.challenge
    }

    /// Prepares a run from a fresh random population.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` if the options do not validate.
    pub fn start(
        &self,
        options: &EvolutionOptions,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Evolution<'_, Pheno, Strategy, Select, Chall>> {
        options.validate()?;
        let population = random_population(options.get_population_size(), rng);
        self.start_from(options, population)
    }

    /// Prepares a run from a given population.
    ///
    /// The best-ever result is seeded from the first candidate only, not from
    /// the best of the population.
    ///
    /// # Errors
    ///
    /// Returns an error if the options do not validate, the population is empty,
    /// or its size differs from the configured population size.
    pub fn start_from(
        &self,
        options: &EvolutionOptions,
        population: Vec<Pheno>,
    ) -> Result<Evolution<'_, Pheno, Strategy, Select, Chall>> {
        options.validate()?;

        if population.len() != options.get_population_size() {
            return Err(GeneticError::Configuration(format!(
                "Population has {} candidates, expected {}",
                population.len(),
                options.get_population_size()
            )));
        }

        let best = self.seed_best(&population)?;
        tracing::info!(
            population_size = options.get_population_size(),
            crossover_rate = options.get_crossover_rate(),
            mutation_rate = options.get_mutation_rate(),
            target_score = self.challenge.max_score(),
            "Starting evolution"
        );

        Ok(Evolution {
            launcher: self,
            options: options.clone(),
            population,
            best,
            generation: 0,
            total_generations: 0,
            restarts: 0,
            started: Instant::now(),
        })
    }

    /// Evolves a random population until a phenotype reaches the challenge's
    /// maximum score, writing the progress report to `out`.
    ///
    /// # Errors
    ///
    /// This method will return an error if:
    /// - The options are invalid (zero or odd population size, rates out of range, ...)
    /// - Selection or breeding fails
    /// - The optional restart bound is exceeded
    /// - Writing to `out` fails
    pub fn evolve<W: Write>(
        &self,
        options: &EvolutionOptions,
        rng: &mut RandomNumberGenerator,
        out: &mut W,
    ) -> Result<EvolutionResult<Pheno>> {
        options.validate()?;
        let population = random_population(options.get_population_size(), rng);
        self.evolve_from(options, population, rng, out)
    }

    /// Like [`evolve`](Self::evolve), starting from the given population.
    pub fn evolve_from<W: Write>(
        &self,
        options: &EvolutionOptions,
        population: Vec<Pheno>,
        rng: &mut RandomNumberGenerator,
        out: &mut W,
    ) -> Result<EvolutionResult<Pheno>> {
        let mut evolution = self.start_from(options, population)?;
        if *options.get_log_level() != LogLevel::None {
            writeln!(out, "Now running genetic algorithm...\n")?;
        }
        evolution.run(rng, out)
    }

    fn seed_best(&self, population: &[Pheno]) -> Result<(Pheno, Fitness)> {
        let first = population
            .first()
            .ok_or_else_genetic(|| GeneticError::EmptyPopulation)?;
        Ok((first.clone(), self.challenge.score(first)))
    }
}

fn random_population<Pheno: Phenotype>(size: usize, rng: &mut RandomNumberGenerator) -> Vec<Pheno> {
    (0..size).map(|_| Pheno::random(rng)).collect()
}

/// A run in progress.
///
/// Each [`step`](Self::step) evaluates the current population, then either
/// stops (solved) or replaces the population with bred children, reporting
/// progress and restarting from scratch once the stagnation limit is reached.
#[derive(Debug)]
pub struct Evolution<'a, Pheno, Strategy, Select, Chall>
where
    Pheno: Phenotype,
    Strategy: BreedStrategy<Pheno>,
    Select: SelectionStrategy<Pheno>,
    Chall: Challenge<Pheno>,
{
    launcher: &'a EvolutionLauncher<Pheno, Strategy, Select, Chall>,
    options: EvolutionOptions,
    population: Vec<Pheno>,
    best: (Pheno, Fitness),
    generation: usize,
    total_generations: usize,
    restarts: usize,
    started: Instant,
}

impl<Pheno, Strategy, Select, Chall> Evolution<'_, Pheno, Strategy, Select, Chall>
where
    Pheno: Phenotype + Display,
    Strategy: BreedStrategy<Pheno>,
    Select: SelectionStrategy<Pheno>,
    Chall: Challenge<Pheno>,
{
    pub fn population(&self) -> &[Pheno] {
        &self.population
    }

    /// The best-ever phenotype and its score since the last restart.
    pub fn best(&self) -> (&Pheno, Fitness) {
        (&self.best.0, self.best.1)
    }

    /// Generations since the last restart.
    pub fn generation(&self) -> usize {
        self.generation
    }

    pub fn total_generations(&self) -> usize {
        self.total_generations
    }

    pub fn restarts(&self) -> usize {
        self.restarts
    }

    pub fn is_solved(&self) -> bool {
        self.best.1 >= self.launcher.challenge.max_score()
    }

    pub fn result(&self) -> EvolutionResult<Pheno> {
        EvolutionResult {
            pheno: self.best.0.clone(),
            score: self.best.1,
            generations: self.generation,
            total_generations: self.total_generations,
            restarts: self.restarts,
            elapsed: self.started.elapsed(),
        }
    }

    /// Steps until solved.
    pub fn run<W: Write>(
        &mut self,
        rng: &mut RandomNumberGenerator,
        out: &mut W,
    ) -> Result<EvolutionResult<Pheno>> {
        while self.step(rng, out)? != GenerationOutcome::Solved {}
        Ok(self.result())
    }

    /// Runs one generation.
    ///
    /// # Errors
    ///
    /// Fails when selection or breeding fails, when the restart bound is
    /// exceeded, or when writing to `out` fails.
    pub fn step<W: Write>(
        &mut self,
        rng: &mut RandomNumberGenerator,
        out: &mut W,
    ) -> Result<GenerationOutcome> {
        let launcher = self.launcher;
        let target = launcher.challenge.max_score();
        self.generation += 1;
        self.total_generations += 1;

        let fitness: Vec<Fitness> = self
            .population
            .iter()
            .map(|candidate| launcher.challenge.score(candidate))
            .collect();

        for (candidate, &score) in self.population.iter().zip(&fitness) {
            if score > self.best.1 {
                self.best = (candidate.clone(), score);
            }
        }

        tracing::debug!(
            generation = self.generation,
            best_score = self.best.1,
            "Generation evaluated"
        );

        if self.is_solved() {
            self.report_solved(out)?;
            return Ok(GenerationOutcome::Solved);
        }

        let pool = launcher.selection.select(
            &self.population,
            &fitness,
            self.options.get_population_size(),
            rng,
        )?;
        self.population = launcher.strategy.breed(&pool, &self.options, rng)?;

        if self.generation % self.options.get_report_interval() == 0 {
            self.report_progress(out, target)?;
        }

        if self.generation >= self.options.get_stagnation_limit() {
            self.restart(rng, out)?;
            return Ok(GenerationOutcome::Restarted);
        }

        Ok(GenerationOutcome::Continued)
    }

    fn restart<W: Write>(&mut self, rng: &mut RandomNumberGenerator, out: &mut W) -> Result<()> {
        if let Some(max_restarts) = self.options.get_max_restarts() {
            if self.restarts >= max_restarts {
                tracing::warn!(max_restarts, best_score = self.best.1, "Restart budget exhausted");
                return Err(GeneticError::MaxAttemptsReached(format!(
                    "No solution after {} restarts ({} generations), best score {}",
                    self.restarts, self.total_generations, self.best.1
                )));
            }
        }

        tracing::info!(
            generation = self.generation,
            best_score = self.best.1,
            restarts = self.restarts + 1,
            "Stagnated, reinitialising population"
        );
        if *self.options.get_log_level() != LogLevel::None {
            writeln!(
                out,
                "\nStuck in local extreme. Initialising new population...\n"
            )?;
        }

        self.population = random_population(self.options.get_population_size(), rng);
        self.best = self.launcher.seed_best(&self.population)?;
        self.generation = 0;
        self.restarts += 1;
        Ok(())
    }

    fn report_progress<W: Write>(&self, out: &mut W, target: Fitness) -> Result<()> {
        match self.options.get_log_level() {
            LogLevel::None => {}
            LogLevel::Minimal => writeln!(
                out,
                "Currently at generation {} with a fitness of {}/{}",
                self.generation, self.best.1, target
            )?,
            LogLevel::Verbose => {
                writeln!(
                    out,
                    "Currently at generation {} with a fitness of {}/{}",
                    self.generation, self.best.1, target
                )?;
                writeln!(out, "Best so far:")?;
                writeln!(out, "{}", self.best.0)?;
            }
        }
        Ok(())
    }

    fn report_solved<W: Write>(&self, out: &mut W) -> Result<()> {
        let elapsed = self.started.elapsed();
        tracing::info!(
            elapsed_secs = elapsed.as_secs_f64(),
            generation = self.generation,
            total_generations = self.total_generations,
            restarts = self.restarts,
            "Puzzle solved"
        );

        if *self.options.get_log_level() != LogLevel::None {
            writeln!(out, "\nSolved in: {:.2} seconds", elapsed.as_secs_f64())?;
            writeln!(out, "Solution: ")?;
            write!(out, "{}", self.best.0)?;
        }
        Ok(())
    }
}
