use std::fmt;
use std::str::FromStr;

/// A named group of records stored side by side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Collection {
    Patients,
    ServiceRequests,
    Appointments,
    ClinicalProcedures,
}

impl Collection {
    pub const ALL: [Collection; 4] = [
        Collection::Patients,
        Collection::ServiceRequests,
        Collection::Appointments,
        Collection::ClinicalProcedures,
    ];

    /// Directory name of this collection under the record data directory.
    pub fn dir_name(self) -> &'static str {
        match self {
            Collection::Patients => "patients",
            Collection::ServiceRequests => "service_requests",
            Collection::Appointments => "appointments",
            Collection::ClinicalProcedures => "clinical_procedures",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

impl FromStr for Collection {
    type Err = String;

    /// Accepts the directory name or its hyphenated URL spelling (`service-requests`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalised = s.trim().replace('-', "_");
        Collection::ALL
            .into_iter()
            .find(|c| c.dir_name() == normalised)
            .ok_or_else(|| format!("unknown collection: {}", s))
    }
}
