use actix_web::{
    get,
    http::header::ContentType,
    web::{self, ServiceConfig},
    HttpResponse, Responder,
};

use crate::render::{render_fragments, render_page, render_rows};
use crate::state::SnapshotStore;

#[get("/")]
pub async fn home(store: web::Data<SnapshotStore>) -> impl Responder {
    let view = store.current();
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(render_page(&view))
}

#[get("/rows")]
pub async fn rows(store: web::Data<SnapshotStore>) -> impl Responder {
    let view = store.current();
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(render_rows(&view.snapshot.coins))
}

#[get("/live")]
pub async fn live(store: web::Data<SnapshotStore>) -> impl Responder {
    HttpResponse::Ok().json(render_fragments(&store.current()))
}

#[get("/coins")]
pub async fn coins(store: web::Data<SnapshotStore>) -> impl Responder {
    HttpResponse::Ok().json(store.current())
}

pub fn init(config: &mut ServiceConfig) {
    config
        .service(home)
        .service(rows)
        .service(live)
        .service(coins);
}
