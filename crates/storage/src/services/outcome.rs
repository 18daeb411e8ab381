use thiserror::Error;
use uuid::Uuid;

/// Why a proposed result outcome was rejected, before anything is written.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OutcomeError {
    #[error("a group result must rank exactly 3 classes")]
    RankingWrongSize,

    #[error("a class may appear at most once in a ranking")]
    DuplicateClass,

    #[error("solo placings require at least one entry")]
    NoPlacings,

    #[error("position {0} is out of range: must be 1, 2 or 3")]
    PositionOutOfRange(i32),

    #[error("position {0} was placed more than once")]
    DuplicatePosition(i32),

    #[error("student name must not be blank")]
    BlankStudent,

    #[error("a result must carry either a ranking or solo placings, not both")]
    AmbiguousShape,
}

/// A validated solo placing as proposed by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProposedPlacing {
    pub class_id: Uuid,
    pub student: String,
    pub position: i32,
}

/// Checks a group ranking: exactly three distinct classes, 1st to 3rd.
pub fn validate_ranking(placings: &[Uuid]) -> Result<(), OutcomeError> {
    if placings.len() != 3 {
        return Err(OutcomeError::RankingWrongSize);
    }
    for (i, class_id) in placings.iter().enumerate() {
        if placings[..i].contains(class_id) {
            return Err(OutcomeError::DuplicateClass);
        }
    }
    Ok(())
}

/// Checks solo placings: non-empty, positions 1..=3 each used at most once,
/// non-blank student names. Returns the placings with names trimmed.
pub fn validate_solo_placings(
    placings: &[ProposedPlacing],
) -> Result<Vec<ProposedPlacing>, OutcomeError> {
    if placings.is_empty() {
        return Err(OutcomeError::NoPlacings);
    }

    let mut seen_positions: Vec<i32> = Vec::with_capacity(placings.len());
    let mut normalized = Vec::with_capacity(placings.len());
    for placing in placings {
        if !(1..=3).contains(&placing.position) {
            return Err(OutcomeError::PositionOutOfRange(placing.position));
        }
        if seen_positions.contains(&placing.position) {
            return Err(OutcomeError::DuplicatePosition(placing.position));
        }
        seen_positions.push(placing.position);

        let student = placing.student.trim();
        if student.is_empty() {
            return Err(OutcomeError::BlankStudent);
        }
        normalized.push(ProposedPlacing {
            class_id: placing.class_id,
            student: student.to_string(),
            position: placing.position,
        });
    }

    Ok(normalized)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn placing(position: i32, student: &str) -> ProposedPlacing {
        ProposedPlacing {
            class_id: Uuid::new_v4(),
            student: student.to_string(),
            position,
        }
    }

    #[test]
    fn test_ranking_must_have_three_classes() {
        let two = vec![Uuid::new_v4(), Uuid::new_v4()];
        assert_eq!(validate_ranking(&two), Err(OutcomeError::RankingWrongSize));

        let three = vec![Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4()];
        assert_eq!(validate_ranking(&three), Ok(()));
    }

    #[test]
    fn test_ranking_rejects_repeated_class() {
        let repeated = Uuid::new_v4();
        let placings = vec![repeated, Uuid::new_v4(), repeated];
        assert_eq!(validate_ranking(&placings), Err(OutcomeError::DuplicateClass));
    }

    #[test]
    fn test_solo_positions_must_be_in_range() {
        assert_eq!(
            validate_solo_placings(&[placing(0, "Asha")]),
            Err(OutcomeError::PositionOutOfRange(0))
        );
        assert_eq!(
            validate_solo_placings(&[placing(4, "Asha")]),
            Err(OutcomeError::PositionOutOfRange(4))
        );
    }

    #[test]
    fn test_solo_positions_must_be_unique() {
        assert_eq!(
            validate_solo_placings(&[placing(1, "Asha"), placing(1, "Bela")]),
            Err(OutcomeError::DuplicatePosition(1))
        );
    }

    #[test]
    fn test_solo_placings_trim_student_names() {
        let normalized = validate_solo_placings(&[placing(1, "  Asha ")]).unwrap();
        assert_eq!(normalized[0].student, "Asha");
    }

    #[test]
    fn test_solo_placings_reject_blank_student() {
        assert_eq!(
            validate_solo_placings(&[placing(1, "   ")]),
            Err(OutcomeError::BlankStudent)
        );
    }

    #[test]
    fn test_partial_podium_is_allowed() {
        // A solo event may declare fewer than three placed students.
        let normalized =
            validate_solo_placings(&[placing(2, "Asha"), placing(1, "Bela")]).unwrap();
        assert_eq!(normalized.len(), 2);
    }
}
