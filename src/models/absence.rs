/// The three absence markers a line's `activity_desc` can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum AbsenceKind {
    Ferie,
    Permesso,
    Malattia,
}

impl AbsenceKind {
    pub const ALL: [AbsenceKind; 3] = [
        AbsenceKind::Ferie,
        AbsenceKind::Permesso,
        AbsenceKind::Malattia,
    ];

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            AbsenceKind::Ferie => "FERIE",
            AbsenceKind::Permesso => "PERMESSO",
            AbsenceKind::Malattia => "MALATTIA",
        }
    }

    /// Convert DB string → enum.
    ///
    /// Exact match only: a work activity such as "Sviluppo" is not an absence,
    /// and neither is "ferie" in lowercase.
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "FERIE" => Some(AbsenceKind::Ferie),
            "PERMESSO" => Some(AbsenceKind::Permesso),
            "MALATTIA" => Some(AbsenceKind::Malattia),
            _ => None,
        }
    }
}
