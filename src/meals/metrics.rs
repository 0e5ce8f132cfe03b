use serde::Serialize;

use super::repo::Meal;

/// Aggregate diet-adherence numbers for one user's meals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DietMetrics {
    pub total_meals: u64,
    pub total_meals_in_diet: u64,
    pub total_meals_off_diet: u64,
    pub best_in_diet_sequence: u64,
}

/// Single pass over the meals in the order given; callers hand them over
/// sorted by date descending. The streak counter grows on each in-diet
/// meal and resets on each off-diet one.
pub fn compute(meals: &[Meal]) -> DietMetrics {
    let mut in_diet = 0u64;
    let mut current_sequence = 0u64;
    let mut best_sequence = 0u64;

    for meal in meals {
        if meal.is_in_diet {
            in_diet += 1;
            current_sequence += 1;
            best_sequence = best_sequence.max(current_sequence);
        } else {
            current_sequence = 0;
        }
    }

    DietMetrics {
        total_meals: meals.len() as u64,
        total_meals_in_diet: in_diet,
        total_meals_off_diet: meals.len() as u64 - in_diet,
        best_in_diet_sequence: best_sequence,
    }
}

#[cfg(test)]
mod tests {
    use time::OffsetDateTime;
    use uuid::Uuid;

    use super::*;

    fn meal(is_in_diet: bool) -> Meal {
        let now = OffsetDateTime::now_utc();
        Meal {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            name: "meal".into(),
            description: None,
            date: now,
            is_in_diet,
            created_at: now,
            updated_at: now,
        }
    }

    fn meals(flags: &[bool]) -> Vec<Meal> {
        flags.iter().copied().map(meal).collect()
    }

    #[test]
    fn empty_input_yields_zeroes() {
        assert_eq!(
            compute(&[]),
            DietMetrics {
                total_meals: 0,
                total_meals_in_diet: 0,
                total_meals_off_diet: 0,
                best_in_diet_sequence: 0,
            }
        );
    }

    #[test]
    fn counts_split_by_diet_flag() {
        let m = compute(&meals(&[true, false, false, true, true]));
        assert_eq!(m.total_meals, 5);
        assert_eq!(m.total_meals_in_diet, 3);
        assert_eq!(m.total_meals_off_diet, 2);
        assert_eq!(m.total_meals_in_diet + m.total_meals_off_diet, m.total_meals);
    }

    #[test]
    fn no_adherent_meals_yield_zero_sequence() {
        let m = compute(&meals(&[false, false, false]));
        assert_eq!(m.best_in_diet_sequence, 0);
    }

    #[test]
    fn streak_ends_at_first_break() {
        let m = compute(&meals(&[true, true, false]));
        assert_eq!(m.best_in_diet_sequence, 2);
    }

    #[test]
    fn later_streak_beats_earlier_one() {
        let m = compute(&meals(&[true, false, true, true, true]));
        assert_eq!(m.best_in_diet_sequence, 3);
    }

    #[test]
    fn streak_does_not_span_breaks() {
        let m = compute(&meals(&[true, true, false, true, true]));
        assert_eq!(m.best_in_diet_sequence, 2);
    }

    #[test]
    fn all_adherent_counts_every_meal() {
        let m = compute(&meals(&[true, true, true, true]));
        assert_eq!(m.best_in_diet_sequence, 4);
        assert_eq!(m.total_meals_off_diet, 0);
    }
}
