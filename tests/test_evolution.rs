use std::cell::Cell;
use std::rc::Rc;

use zebra_ga::{
    candidate::Candidate,
    clues::PuzzleChallenge,
    error::{GeneticError, Result},
    evolution::{
        Challenge, EvolutionLauncher, EvolutionOptions, Fitness, GenerationOutcome, LogLevel,
    },
    phenotype::Phenotype,
    rng::RandomNumberGenerator,
    selection::TournamentSelection,
    strategy::{BreedStrategy, PairwiseStrategy},
};

const SOLUTION: [[u8; 5]; 5] = [
    [1, 0, 3, 2, 4],
    [0, 4, 3, 2, 1],
    [1, 3, 0, 4, 2],
    [0, 1, 3, 4, 2],
    [1, 4, 3, 0, 2],
];

fn solution() -> Candidate {
    Candidate::from_rows(SOLUTION).unwrap()
}

fn random_population(size: usize, rng: &mut RandomNumberGenerator) -> Vec<Candidate> {
    (0..size).map(|_| Candidate::random(rng)).collect()
}

/// Delegates to `PairwiseStrategy` and counts how often breeding runs.
#[derive(Debug, Clone, Default)]
struct CountingStrategy {
    calls: Rc<Cell<usize>>,
}

impl BreedStrategy<Candidate> for CountingStrategy {
    fn breed(
        &self,
        parents: &[Candidate],
        evol_options: &EvolutionOptions,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Candidate>> {
        self.calls.set(self.calls.get() + 1);
        PairwiseStrategy::new().breed(parents, evol_options, rng)
    }
}

/// Every candidate scores 3 out of 15, so the run can never improve.
#[derive(Debug, Clone)]
struct FlatChallenge;

impl Challenge<Candidate> for FlatChallenge {
    fn score(&self, _candidate: &Candidate) -> Fitness {
        3
    }

    fn max_score(&self) -> Fitness {
        15
    }
}

fn quiet_options(population_size: usize) -> EvolutionOptions {
    EvolutionOptions::builder()
        .population_size(population_size)
        .log_level(LogLevel::None)
        .build()
}

#[test]
fn test_solved_in_first_evaluation_without_breeding() {
    let mut rng = RandomNumberGenerator::from_seed(2024);
    let mut population = random_population(130, &mut rng);
    population[57] = solution();
    let initial = population.clone();

    let strategy = CountingStrategy::default();
    let calls = Rc::clone(&strategy.calls);
    let launcher: EvolutionLauncher<Candidate, _, _, _> = EvolutionLauncher::new(
        strategy,
        TournamentSelection::default(),
        PuzzleChallenge::default(),
    );

    let options = quiet_options(130);
    let mut evolution = launcher.start_from(&options, population).unwrap();
    let outcome = evolution.step(&mut rng, &mut std::io::sink()).unwrap();

    assert_eq!(outcome, GenerationOutcome::Solved);
    assert_eq!(calls.get(), 0);
    assert_eq!(evolution.generation(), 1);
    assert_eq!(evolution.population(), initial.as_slice());
    assert_eq!(evolution.best(), (&solution(), 15));
    assert!(evolution.is_solved());
}

#[test]
fn test_solved_first_candidate_seeds_best() {
    let mut rng = RandomNumberGenerator::from_seed(7);
    let mut population = random_population(10, &mut rng);
    population[0] = solution();

    let launcher = zebra_ga::puzzle_solver();
    let mut out = Vec::new();
    let result = launcher
        .evolve_from(&quiet_options(10), population, &mut rng, &mut out)
        .unwrap();

    assert_eq!(result.pheno, solution());
    assert_eq!(result.score, 15);
    assert_eq!(result.generations, 1);
    assert_eq!(result.restarts, 0);
    assert!(out.is_empty());
}

#[test]
fn test_best_is_seeded_from_first_candidate_only() {
    let mut rng = RandomNumberGenerator::from_seed(8);
    let mut population = random_population(10, &mut rng);
    population[4] = solution();

    let launcher = zebra_ga::puzzle_solver();
    let evolution = launcher.start_from(&quiet_options(10), population.clone()).unwrap();

    let first_score = launcher.challenge().score(&population[0]);
    assert_eq!(evolution.best(), (&population[0], first_score));
    assert!(!evolution.is_solved());
}

#[test]
fn test_stagnation_restarts_population() {
    let mut rng = RandomNumberGenerator::from_seed(31);
    let launcher: EvolutionLauncher<Candidate, _, _, _> = EvolutionLauncher::new(
        PairwiseStrategy::new(),
        TournamentSelection::default(),
        FlatChallenge,
    );

    let options = quiet_options(20);
    let mut evolution = launcher.start(&options, &mut rng).unwrap();
    let mut sink = std::io::sink();

    for generation in 1..50 {
        let outcome = evolution.step(&mut rng, &mut sink).unwrap();
        assert_eq!(outcome, GenerationOutcome::Continued);
        assert_eq!(evolution.generation(), generation);
    }

    let before_restart = evolution.population().to_vec();
    let outcome = evolution.step(&mut rng, &mut sink).unwrap();

    assert_eq!(outcome, GenerationOutcome::Restarted);
    assert_eq!(evolution.generation(), 0);
    assert_eq!(evolution.restarts(), 1);
    assert_eq!(evolution.total_generations(), 50);
    assert_eq!(evolution.population().len(), 20);
    assert_ne!(evolution.population(), before_restart.as_slice());
    assert!(evolution.population().iter().all(Candidate::is_valid));
    assert_eq!(evolution.best(), (&evolution.population()[0], 3));

    // The counter runs again from zero after the restart.
    evolution.step(&mut rng, &mut sink).unwrap();
    assert_eq!(evolution.generation(), 1);
}

#[test]
fn test_stagnation_report() {
    let mut rng = RandomNumberGenerator::from_seed(32);
    let launcher: EvolutionLauncher<Candidate, _, _, _> = EvolutionLauncher::new(
        PairwiseStrategy::new(),
        TournamentSelection::default(),
        FlatChallenge,
    );

    let options = EvolutionOptions::builder().population_size(20).build();
    let mut evolution = launcher.start(&options, &mut rng).unwrap();
    let mut out = Vec::new();
    for _ in 0..50 {
        evolution.step(&mut rng, &mut out).unwrap();
    }

    let report = String::from_utf8(out).unwrap();
    let progress: Vec<&str> = report
        .lines()
        .filter(|line| line.starts_with("Currently at generation"))
        .collect();

    assert_eq!(progress.len(), 10);
    assert_eq!(progress[0], "Currently at generation 5 with a fitness of 3/15");
    assert_eq!(progress[9], "Currently at generation 50 with a fitness of 3/15");
    assert!(report.ends_with("\nStuck in local extreme. Initialising new population...\n\n"));
}

#[test]
fn test_restart_bound() {
    let mut rng = RandomNumberGenerator::from_seed(33);
    let launcher: EvolutionLauncher<Candidate, _, _, _> = EvolutionLauncher::new(
        PairwiseStrategy::new(),
        TournamentSelection::default(),
        FlatChallenge,
    );

    let options = EvolutionOptions::builder()
        .population_size(10)
        .stagnation_limit(2)
        .max_restarts(1)
        .log_level(LogLevel::None)
        .build();

    match launcher.evolve(&options, &mut rng, &mut std::io::sink()) {
        Err(GeneticError::MaxAttemptsReached(msg)) => assert!(msg.contains("1 restarts")),
        other => panic!("Expected MaxAttemptsReached, got {:?}", other),
    }
}

#[test]
fn test_invalid_options() {
    let mut rng = RandomNumberGenerator::new();
    let launcher = zebra_ga::puzzle_solver();

    let odd = EvolutionOptions::builder().population_size(7).build();
    let result = launcher.evolve(&odd, &mut rng, &mut std::io::sink());
    assert!(matches!(result, Err(GeneticError::Configuration(_))));

    let population = random_population(8, &mut rng);
    let result = launcher.start_from(&quiet_options(10), population);
    assert!(matches!(result, Err(GeneticError::Configuration(_))));
}

#[test]
fn test_rejected_population_writes_no_banner() {
    let mut rng = RandomNumberGenerator::from_seed(8);
    let population = random_population(8, &mut rng);
    let options = EvolutionOptions::builder().population_size(10).build();

    let mut out = Vec::new();
    let result = zebra_ga::puzzle_solver().evolve_from(&options, population, &mut rng, &mut out);

    assert!(matches!(result, Err(GeneticError::Configuration(_))));
    assert!(out.is_empty());
}

#[test]
fn test_solved_report_format() {
    let mut rng = RandomNumberGenerator::from_seed(9);
    let mut population = random_population(4, &mut rng);
    population[2] = solution();

    let options = EvolutionOptions::builder().population_size(4).build();
    let mut out = Vec::new();
    zebra_ga::puzzle_solver()
        .evolve_from(&options, population, &mut rng, &mut out)
        .unwrap();

    let report = String::from_utf8(out).unwrap();
    assert!(report.starts_with("Now running genetic algorithm...\n\n\nSolved in: "));
    assert!(report.contains(" seconds\nSolution: \n"));
    assert!(report.ends_with(&solution().to_string()));

    let seconds = report
        .split("Solved in: ")
        .nth(1)
        .and_then(|rest| rest.split(' ').next())
        .unwrap();
    assert_eq!(seconds.split('.').nth(1).map(str::len), Some(2));
}

#[test]
fn test_solving_generation_prints_no_progress_line() {
    let mut rng = RandomNumberGenerator::from_seed(19);
    let mut population = random_population(6, &mut rng);
    population[3] = solution();

    let options = EvolutionOptions::builder()
        .population_size(6)
        .report_interval(1)
        .build();
    let mut out = Vec::new();
    let result = zebra_ga::puzzle_solver()
        .evolve_from(&options, population, &mut rng, &mut out)
        .unwrap();

    assert_eq!(result.generations, 1);
    let report = String::from_utf8(out).unwrap();
    assert!(!report.contains("Currently at generation"));
    assert!(report.starts_with("Now running genetic algorithm...\n\n\nSolved in: "));
}

#[test]
fn test_verbose_report_includes_best_candidate() {
    let mut rng = RandomNumberGenerator::from_seed(10);
    let launcher: EvolutionLauncher<Candidate, _, _, _> = EvolutionLauncher::new(
        PairwiseStrategy::new(),
        TournamentSelection::default(),
        FlatChallenge,
    );

    let options = EvolutionOptions::builder()
        .population_size(6)
        .report_interval(1)
        .log_level(LogLevel::Verbose)
        .build();
    let mut evolution = launcher.start(&options, &mut rng).unwrap();
    let mut out = Vec::new();
    evolution.step(&mut rng, &mut out).unwrap();

    let report = String::from_utf8(out).unwrap();
    assert!(report.starts_with("Currently at generation 1 with a fitness of 3/15\nBest so far:\n"));
    assert!(report.contains(&evolution.best().0.to_string()));
}

#[test]
fn test_seeded_runs_are_reproducible() {
    // Three clues are quick to satisfy, keeping the run short.
    let challenge = PuzzleChallenge::new(zebra_ga::clues::PUZZLE_CLUES[..3].to_vec());
    let launcher: EvolutionLauncher<Candidate, _, _, _> = EvolutionLauncher::new(
        PairwiseStrategy::new(),
        TournamentSelection::default(),
        challenge,
    );
    let options = quiet_options(30);

    let first = launcher
        .evolve(&options, &mut RandomNumberGenerator::from_seed(5), &mut std::io::sink())
        .unwrap();
    let second = launcher
        .evolve(&options, &mut RandomNumberGenerator::from_seed(5), &mut std::io::sink())
        .unwrap();

    assert_eq!(first.score, 3);
    assert_eq!(first.pheno, second.pheno);
    assert_eq!(first.total_generations, second.total_generations);
    assert_eq!(first.restarts, second.restarts);
}
