use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct BookDoc {
    pub title: String,
    pub author: String,
    pub publisher: String,
    pub published_date: String,
    pub isbn: String,
}

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct NewBookDoc {
    pub title: String,
    pub author: String,
    pub publisher: String,
    pub published_date: String,
    pub isbn: String,
}

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct BookUpdateDoc {
    pub title: String,
    pub author: String,
    pub publisher: String,
    pub published_date: String,
}

#[derive(ToSchema)]
pub struct MessageDoc { pub message: String }

#[derive(ToSchema)]
pub struct BookMessageDoc { pub message: String, pub book: BookDoc }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::books::list_books,
        crate::routes::books::get_book,
        crate::routes::books::create_book,
        crate::routes::books::update_book,
        crate::routes::books::delete_book,
    ),
    components(
        schemas(
            HealthResponse,
            BookDoc,
            NewBookDoc,
            BookUpdateDoc,
            MessageDoc,
            BookMessageDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "books")
    )
)]
pub struct ApiDoc;
