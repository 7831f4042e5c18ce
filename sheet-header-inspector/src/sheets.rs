/// Sheets whose header rows are dumped when no `--sheet` is given.
pub const KNOWN_SHEETS: [&str; 14] = [
    "Users",
    "Profiles",
    "Workouts",
    "Exercises",
    "Sessions",
    "Sets",
    "Goals",
    "Metrics",
    "Meals",
    "Foods",
    "Sleep",
    "Notes",
    "Settings",
    "AuditLog",
];
