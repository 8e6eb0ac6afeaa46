use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::{
    ActivityRecordService, AssignmentService, LookupService, ProfessorService, WorkTimeService,
};
use crate::infrastructure::persistence::{
    DEGREES, DISCIPLINES, OFFICES, OTHER_ACTIVITIES, POSITIONS, PgActivityRecordRepository,
    PgAssignmentRepository, PgLookupRepository, PgProfessorRepository, PgWorkTimeRepository,
    TEACHING_TYPES,
};

/// Shared application state injected into all handlers.
///
/// One service per resource; the six string-valued reference resources each
/// get their own [`LookupService`] instance bound to their table.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub offices: Arc<LookupService>,
    pub degrees: Arc<LookupService>,
    pub positions: Arc<LookupService>,
    pub disciplines: Arc<LookupService>,
    pub teaching_types: Arc<LookupService>,
    pub activities: Arc<LookupService>,
    pub work_times: Arc<WorkTimeService>,
    pub professors: Arc<ProfessorService>,
    pub assignments: Arc<AssignmentService>,
    pub activity_records: Arc<ActivityRecordService>,
}

impl AppState {
    /// Wires repositories and services on top of a connection pool.
    ///
    /// The `max_len` arguments mirror the column widths in the schema.
    pub fn from_pool(db: PgPool) -> Self {
        let pool = Arc::new(db.clone());

        let office_repo = Arc::new(PgLookupRepository::new(pool.clone(), OFFICES));
        let degree_repo = Arc::new(PgLookupRepository::new(pool.clone(), DEGREES));
        let position_repo = Arc::new(PgLookupRepository::new(pool.clone(), POSITIONS));
        let discipline_repo = Arc::new(PgLookupRepository::new(pool.clone(), DISCIPLINES));
        let teaching_type_repo = Arc::new(PgLookupRepository::new(pool.clone(), TEACHING_TYPES));
        let activity_repo = Arc::new(PgLookupRepository::new(pool.clone(), OTHER_ACTIVITIES));
        let work_time_repo = Arc::new(PgWorkTimeRepository::new(pool.clone()));
        let professor_repo = Arc::new(PgProfessorRepository::new(pool.clone()));
        let assignment_repo = Arc::new(PgAssignmentRepository::new(pool.clone()));
        let record_repo = Arc::new(PgActivityRecordRepository::new(pool.clone()));

        let professors = Arc::new(ProfessorService::new(
            professor_repo.clone(),
            office_repo.clone(),
            degree_repo.clone(),
            position_repo.clone(),
            work_time_repo.clone(),
            assignment_repo.clone(),
            record_repo.clone(),
        ));
        let assignments = Arc::new(AssignmentService::new(
            assignment_repo,
            professor_repo.clone(),
            discipline_repo.clone(),
            teaching_type_repo.clone(),
        ));
        let activity_records = Arc::new(ActivityRecordService::new(
            record_repo,
            professor_repo,
            activity_repo.clone(),
        ));

        Self {
            db,
            offices: Arc::new(LookupService::new(office_repo, "office", 5)),
            degrees: Arc::new(LookupService::new(degree_repo, "degree", 50)),
            positions: Arc::new(LookupService::new(position_repo, "position", 30)),
            disciplines: Arc::new(LookupService::new(discipline_repo, "discipline", 50)),
            teaching_types: Arc::new(LookupService::new(teaching_type_repo, "teaching type", 15)),
            activities: Arc::new(LookupService::new(activity_repo, "activity", 30)),
            work_times: Arc::new(WorkTimeService::new(work_time_repo)),
            professors,
            assignments,
            activity_records,
        }
    }
}
