use std::fmt;

// ---------------------------------------------------------------------------
// Roster errors
// ---------------------------------------------------------------------------

/// An error raised by a roster operation.
///
/// All variants are recovered locally: the view layer turns them into a
/// transient alert and the attempted mutation is aborted. None of them is
/// fatal and none propagates beyond the single operation that raised it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    /// At least one required draft field is empty.
    MissingFields,
    /// A record with the same (email, domain) pair already exists.
    DuplicateStudent,
    /// The target record's training is not completed, so it cannot be removed.
    NotCompleted,
    /// The index does not refer to a record in the roster.
    OutOfRange(usize),
}

impl fmt::Display for RosterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RosterError::MissingFields => {
                write!(f, "Veuillez remplir tous les champs avant d'ajouter un étudiant.")
            }
            RosterError::DuplicateStudent => {
                write!(f, "Cet étudiant existe déjà.")
            }
            RosterError::NotCompleted => {
                write!(
                    f,
                    "Vous ne pouvez pas supprimer un étudiant dont la formation n'est pas encore terminée."
                )
            }
            RosterError::OutOfRange(index) => {
                write!(f, "aucun étudiant à l'index {}", index)
            }
        }
    }
}

impl std::error::Error for RosterError {}
