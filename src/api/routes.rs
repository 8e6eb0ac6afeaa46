//! API route configuration.
//!
//! Every resource exposes the same verb set: `GET` list, `POST` create on
//! the collection; `GET`, `PUT`, `DELETE` on the item path.

use crate::api::handlers::{
    Activities, Degrees, Disciplines, LookupResource, Offices, Positions, TeachingTypes,
    activity_record_list_handler, assignment_list_handler, create_activity_record_handler,
    create_assignment_handler, create_lookup_handler, create_professor_handler,
    create_work_time_handler, delete_activity_record_handler, delete_assignment_handler,
    delete_lookup_handler, delete_professor_handler, delete_work_time_handler,
    list_lookup_handler, professor_list_handler, retrieve_activity_record_handler,
    retrieve_assignment_handler, retrieve_discipline_handler, retrieve_lookup_handler,
    retrieve_professor_handler, retrieve_work_time_handler, update_activity_record_handler,
    update_assignment_handler, update_lookup_handler, update_professor_handler,
    update_work_time_handler, work_time_list_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

fn lookup_routes<R: LookupResource>(path: &str) -> Router<AppState> {
    Router::new()
        .route(
            path,
            get(list_lookup_handler::<R>).post(create_lookup_handler::<R>),
        )
        .route(
            &format!("{path}/{{id}}"),
            get(retrieve_lookup_handler::<R>)
                .put(update_lookup_handler::<R>)
                .delete(delete_lookup_handler::<R>),
        )
}

/// All API routes.
///
/// # Endpoints
///
/// - `/offices`, `/degrees`, `/positions`, `/work-times`, `/disciplines`,
///   `/teaching-types`, `/activities` - reference tables (id + one scalar)
/// - `/professors`              - full records with expanded reads
/// - `/professor-disciplines`   - (professor, discipline, teaching type)
/// - `/professor-activities`    - (professor, activity) with description
///
/// Discipline retrieve is special-cased: it embeds the discipline's
/// assignments.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(lookup_routes::<Offices>("/offices"))
        .merge(lookup_routes::<Degrees>("/degrees"))
        .merge(lookup_routes::<Positions>("/positions"))
        .merge(lookup_routes::<TeachingTypes>("/teaching-types"))
        .merge(lookup_routes::<Activities>("/activities"))
        .route(
            "/disciplines",
            get(list_lookup_handler::<Disciplines>).post(create_lookup_handler::<Disciplines>),
        )
        .route(
            "/disciplines/{id}",
            get(retrieve_discipline_handler)
                .put(update_lookup_handler::<Disciplines>)
                .delete(delete_lookup_handler::<Disciplines>),
        )
        .route(
            "/work-times",
            get(work_time_list_handler).post(create_work_time_handler),
        )
        .route(
            "/work-times/{id}",
            get(retrieve_work_time_handler)
                .put(update_work_time_handler)
                .delete(delete_work_time_handler),
        )
        .route(
            "/professors",
            get(professor_list_handler).post(create_professor_handler),
        )
        .route(
            "/professors/{id}",
            get(retrieve_professor_handler)
                .put(update_professor_handler)
                .delete(delete_professor_handler),
        )
        .route(
            "/professor-disciplines",
            get(assignment_list_handler).post(create_assignment_handler),
        )
        .route(
            "/professor-disciplines/{id}",
            get(retrieve_assignment_handler)
                .put(update_assignment_handler)
                .delete(delete_assignment_handler),
        )
        .route(
            "/professor-activities",
            get(activity_record_list_handler).post(create_activity_record_handler),
        )
        .route(
            "/professor-activities/{id}",
            get(retrieve_activity_record_handler)
                .put(update_activity_record_handler)
                .delete(delete_activity_record_handler),
        )
}
