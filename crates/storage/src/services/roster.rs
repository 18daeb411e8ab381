use thiserror::Error;

/// Why a proposed student roster was rejected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RosterError {
    #[error("at least one student is required")]
    Empty,

    #[error("student names must not be blank")]
    BlankName,

    #[error("{actual} students is below the event minimum of {min}")]
    BelowMinimum { min: i32, actual: usize },

    #[error("{actual} students exceeds the event maximum of {max}")]
    AboveMaximum { max: i32, actual: usize },
}

/// Validates a proposed roster against an event's participation bounds and
/// returns the normalized student list.
///
/// Names are trimmed and de-duplicated (first occurrence wins); blank or
/// whitespace-only names are rejected outright. The capacity check runs on
/// the normalized count and both bounds are inclusive. Pure function, no
/// side effects; persisting the registration is the caller's concern.
pub fn validate_roster(
    min_students: i32,
    max_students: i32,
    students: &[String],
) -> Result<Vec<String>, RosterError> {
    if students.is_empty() {
        return Err(RosterError::Empty);
    }

    let mut roster: Vec<String> = Vec::with_capacity(students.len());
    for name in students {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(RosterError::BlankName);
        }
        if !roster.iter().any(|existing| existing == trimmed) {
            roster.push(trimmed.to_string());
        }
    }

    let count = roster.len();
    if (count as i64) < min_students as i64 {
        return Err(RosterError::BelowMinimum {
            min: min_students,
            actual: count,
        });
    }
    if (count as i64) > max_students as i64 {
        return Err(RosterError::AboveMaximum {
            max: max_students,
            actual: count,
        });
    }

    Ok(roster)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let two = names(&["Asha", "Bela"]);
        assert_eq!(validate_roster(2, 4, &two), Ok(two.clone()));

        let four = names(&["Asha", "Bela", "Chitra", "Dev"]);
        assert_eq!(validate_roster(2, 4, &four), Ok(four.clone()));
    }

    #[test]
    fn test_below_minimum_rejected() {
        let one = names(&["Asha"]);
        assert_eq!(
            validate_roster(2, 4, &one),
            Err(RosterError::BelowMinimum { min: 2, actual: 1 })
        );
    }

    #[test]
    fn test_above_maximum_rejected() {
        let three = names(&["Asha", "Bela", "Chitra"]);
        assert_eq!(
            validate_roster(1, 2, &three),
            Err(RosterError::AboveMaximum { max: 2, actual: 3 })
        );
    }

    #[test]
    fn test_exact_capacity_event() {
        // minStudents == maxStudents == 2
        assert_eq!(
            validate_roster(2, 2, &names(&["Asha"])),
            Err(RosterError::BelowMinimum { min: 2, actual: 1 })
        );
        assert!(validate_roster(2, 2, &names(&["Asha", "Bela"])).is_ok());
        assert_eq!(
            validate_roster(2, 2, &names(&["Asha", "Bela", "Chitra"])),
            Err(RosterError::AboveMaximum { max: 2, actual: 3 })
        );
    }

    #[test]
    fn test_empty_roster_rejected() {
        assert_eq!(validate_roster(1, 5, &[]), Err(RosterError::Empty));
    }

    #[test]
    fn test_blank_names_rejected() {
        assert_eq!(
            validate_roster(1, 5, &names(&["Asha", "   "])),
            Err(RosterError::BlankName)
        );
        assert_eq!(
            validate_roster(1, 5, &names(&[""])),
            Err(RosterError::BlankName)
        );
    }

    #[test]
    fn test_names_are_trimmed() {
        let roster = validate_roster(1, 5, &names(&["  Asha ", "Bela"])).unwrap();
        assert_eq!(roster, names(&["Asha", "Bela"]));
    }

    #[test]
    fn test_duplicates_collapse_before_capacity_check() {
        // Two spellings of the same name normalize to one student, which is
        // below a minimum of two.
        assert_eq!(
            validate_roster(2, 5, &names(&["Asha", " Asha"])),
            Err(RosterError::BelowMinimum { min: 2, actual: 1 })
        );
    }

    #[test]
    fn test_duplicates_preserve_first_seen_order() {
        let roster = validate_roster(1, 5, &names(&["Bela", "Asha", "Bela"])).unwrap();
        assert_eq!(roster, names(&["Bela", "Asha"]));
    }
}
