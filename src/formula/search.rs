use crate::units::UnitVector;

use super::database::{self, Formula};

/// Searches the built-in formula table by unit signature.
///
/// Given the dimension vectors the caller already holds values for, the
/// searcher lists formulas producing a requested target dimension. A
/// formula missing some inputs may still qualify when other formulas can
/// fill the gaps: up to three missing unit types, each closed by one
/// supporting formula, itself allowed one helper. Supporting formulas are
/// flattened into the result behind their main formula, tagged `---`
/// (helpers `------`) in [`Formula::category`].
pub struct FormulaSearcher {
    formulas: &'static [Formula],
}

/// A main-formula match plus the supporting formulas closing its gaps.
struct Candidate {
    index:    usize,
    score:    f64,
    supports: Vec<Support>,
}

/// One resolved missing input: the formula producing it, plus at most
/// one helper that in turn feeds that formula.
struct Support {
    index:  usize,
    helper: Option<usize>,
}

impl FormulaSearcher {
    /// Creates a searcher over the built-in table.
    #[allow(clippy::new_without_default)]
    #[must_use]
    pub fn new() -> Self {
        Self { formulas: database::FORMULAS }
    }

    /// Lists formulas whose output has dimension `target`, best match
    /// first.
    ///
    /// `available` is the multiset of dimension vectors the caller can
    /// supply; multiplicity matters, so a formula wanting two masses
    /// needs two mass entries in the pool. Results order by fewest
    /// supporting formulas, then score descending; each formula name
    /// appears at most once.
    #[must_use]
    pub fn find_by_units(&self, available: &[UnitVector], target: UnitVector) -> Vec<Formula> {
        let mut candidates = Vec::new();

        for (index, formula) in self.formulas.iter().enumerate() {
            if formula.output() != Some(target) {
                continue;
            }

            let missing = missing_types(formula, available);
            if missing.len() > 3 {
                continue;
            }

            let supports: Option<Vec<Support>> = missing
                .into_iter()
                .map(|needed| self.resolve(needed, available))
                .collect();
            let Some(supports) = supports else {
                continue;
            };

            #[allow(clippy::cast_precision_loss)]
            let score = score_against(formula, available) - supports.len() as f64 * 5.0;
            candidates.push(Candidate { index, score, supports });
        }

        candidates.sort_by(|a, b| {
            a.supports.len().cmp(&b.supports.len()).then_with(|| b.score.total_cmp(&a.score))
        });

        self.flatten(&candidates)
    }

    /// Finds the best-scoring way to produce `target` from `pool`:
    /// either one formula satisfied outright, or one formula plus a
    /// helper producing its single missing input type.
    fn resolve(&self, target: UnitVector, pool: &[UnitVector]) -> Option<Support> {
        let mut best: Option<Support> = None;
        let mut best_score = f64::NEG_INFINITY;

        for (index, formula) in self.formulas.iter().enumerate() {
            if formula.output() != Some(target) {
                continue;
            }

            let missing = missing_types(formula, pool);

            if missing.is_empty() {
                let score = score_against(formula, pool);
                if score > best_score {
                    best_score = score;
                    best = Some(Support { index, helper: None });
                }
                continue;
            }

            // Two or more missing types would need a deeper chain.
            let [needed] = missing.as_slice() else {
                continue;
            };

            for (helper_index, helper) in self.formulas.iter().enumerate() {
                if helper.output() != Some(*needed) || !satisfied_by(helper, pool) {
                    continue;
                }
                let augmented = augmented_pool(formula, *needed, pool);
                if !satisfied_by(formula, &augmented) {
                    continue;
                }
                let score = score_against(formula, pool) + score_against(helper, pool);
                if score > best_score {
                    best_score = score;
                    best = Some(Support { index, helper: Some(helper_index) });
                }
            }
        }

        best
    }

    /// Emits candidates main-then-supports, retagging support categories
    /// and dropping any formula already emitted under another candidate.
    fn flatten(&self, candidates: &[Candidate]) -> Vec<Formula> {
        let mut result: Vec<Formula> = Vec::new();
        let mut emitted: Vec<&str> = Vec::new();

        for candidate in candidates {
            let formula = &self.formulas[candidate.index];
            if emitted.contains(&formula.name) {
                continue;
            }
            emitted.push(formula.name);
            result.push(formula.clone());

            for support in &candidate.supports {
                let supporting = &self.formulas[support.index];
                if emitted.contains(&supporting.name) {
                    continue;
                }
                emitted.push(supporting.name);
                let mut tagged = supporting.clone();
                tagged.category = "---";
                result.push(tagged);

                if let Some(helper_index) = support.helper {
                    let helper = &self.formulas[helper_index];
                    if !emitted.contains(&helper.name) {
                        emitted.push(helper.name);
                        let mut tagged = helper.clone();
                        tagged.category = "------";
                        result.push(tagged);
                    }
                }
            }
        }

        result
    }
}

fn count_in_pool(needle: UnitVector, pool: &[UnitVector]) -> usize {
    pool.iter().filter(|&&unit| unit == needle).count()
}

/// Dimension vectors `formula` needs from the caller, with multiplicity.
/// Constants and the solved-for variable do not count.
fn required_counts(formula: &Formula) -> Vec<(UnitVector, usize)> {
    let mut required: Vec<(UnitVector, usize)> = Vec::new();
    for variable in formula.variables {
        if variable.constant || variable.name == formula.solve_for {
            continue;
        }
        match required.iter_mut().find(|(unit, _)| *unit == variable.unit) {
            Some((_, count)) => *count += 1,
            None => required.push((variable.unit, 1)),
        }
    }
    required
}

fn satisfied_by(formula: &Formula, pool: &[UnitVector]) -> bool {
    required_counts(formula)
        .iter()
        .all(|&(unit, required)| count_in_pool(unit, pool) >= required)
}

/// Unit types `formula` still misses from `pool`, one entry per type.
fn missing_types(formula: &Formula, pool: &[UnitVector]) -> Vec<UnitVector> {
    required_counts(formula)
        .into_iter()
        .filter(|&(unit, required)| count_in_pool(unit, pool) < required)
        .map(|(unit, _)| unit)
        .collect()
}

/// Scores `formula` against `pool`; higher is better. Coverage of the
/// formula's inputs dominates, pool utilization comes next, and a small
/// simplicity term favours formulas with fewer inputs overall.
#[allow(clippy::cast_precision_loss)]
fn score_against(formula: &Formula, pool: &[UnitVector]) -> f64 {
    let mut matched = 0_usize;
    let mut total = 0_usize;
    for (unit, required) in required_counts(formula) {
        total += required;
        matched += count_in_pool(unit, pool).min(required);
    }

    let coverage = if total > 0 {
        matched as f64 / total as f64
    } else {
        1.0
    };
    let utilization = if pool.is_empty() {
        1.0
    } else {
        matched as f64 / pool.len() as f64
    };
    let simplicity = 1.0 / (total + 1) as f64;

    coverage * 100.0 + utilization * 10.0 + simplicity
}

/// Copies `pool`, adding however many `unit` entries `formula` still
/// needs to be satisfied.
fn augmented_pool(formula: &Formula, unit: UnitVector, pool: &[UnitVector]) -> Vec<UnitVector> {
    let mut augmented = pool.to_vec();
    for (required_unit, required) in required_counts(formula) {
        if required_unit != unit {
            continue;
        }
        for _ in count_in_pool(unit, pool)..required {
            augmented.push(unit);
        }
    }
    augmented
}

#[cfg(test)]
mod tests {
    use super::{Formula, FormulaSearcher};
    use crate::units::UnitVector;

    const MASS: UnitVector = UnitVector::KILOGRAM;
    const TIME: UnitVector = UnitVector::SECOND;
    const VELOCITY: UnitVector = UnitVector([1, -1, 0, 0, 0, 0, 0]);
    const ACCELERATION: UnitVector = UnitVector([1, -2, 0, 0, 0, 0, 0]);

    fn names_and_categories(results: &[Formula]) -> Vec<(&str, &str)> {
        results
            .iter()
            .map(|formula| (formula.name, formula.category))
            .collect()
    }

    #[test]
    fn force_formulas_rank_full_matches_first() {
        let results =
            FormulaSearcher::new().find_by_units(&[MASS, ACCELERATION], UnitVector::NEWTON);
        assert_eq!(names_and_categories(&results),
                   vec![("Newton's Second Law (solve for F)", "Dynamics"),
                        ("Weight (solve for W)", "Dynamics"),]);
    }

    #[test]
    fn supporting_formula_fills_a_missing_input() {
        let results =
            FormulaSearcher::new().find_by_units(&[MASS, VELOCITY, TIME], UnitVector::WATT);
        assert_eq!(names_and_categories(&results),
                   vec![("Power from Work (solve for P)", "Energy"),
                        ("Kinetic Energy (solve for KE)", "---"),]);
    }

    #[test]
    fn helpers_are_tagged_and_deduplicated() {
        let results =
            FormulaSearcher::new().find_by_units(&[MASS, ACCELERATION, TIME], UnitVector::JOULE);
        assert_eq!(names_and_categories(&results),
                   vec![("Mass-Energy Equivalence (solve for E)", "Modern Physics"),
                        ("Kinetic Energy (solve for KE)", "Energy"),
                        ("Kinetic Energy (solve for v)", "---"),
                        ("Power from Work (solve for W)", "Energy"),
                        ("Power from Work (solve for P)", "---"),]);
    }

    #[test]
    fn unresolvable_inputs_disqualify_every_match() {
        let results = FormulaSearcher::new().find_by_units(&[], UnitVector::NEWTON);
        assert!(results.is_empty());
    }
}
