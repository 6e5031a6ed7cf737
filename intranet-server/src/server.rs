use crate::connection::receiver::{MessageReceiver, StreamMessageReceiver};
use crate::connection::sender::{MessageSender, WebSocketMessageSender};
use crate::context::ApplicationContext;
use crate::lifecycle::run_connection;
use crate::server::rest_api::error::ApiErrorResponse;
use axum::Router;
use axum::extract::{State, WebSocketUpgrade};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use futures_util::StreamExt;
use std::any::Any;
use tower_http::catch_panic::CatchPanicLayer;
use tracing::error;

pub mod rest_api;

pub async fn run_server(application_context: ApplicationContext) -> std::io::Result<()> {
	let address = application_context.configuration.address;
	axum_server::bind(address)
		.serve(create_router(application_context).into_make_service())
		.await
}

pub fn create_router(application_context: ApplicationContext) -> Router {
	Router::new()
		.route("/ws", get(websocket))
		.nest("/api", rest_api::rest_api().layer(CatchPanicLayer::custom(handle_panic)))
		.with_state(application_context)
}

async fn websocket(
	State(application_context): State<ApplicationContext>,
	websocket_upgrade: WebSocketUpgrade,
) -> Response {
	websocket_upgrade.on_upgrade(move |websocket| {
		let (sink, stream) = websocket.split();
		let message_sender = MessageSender::from(WebSocketMessageSender::new(sink));
		let message_receiver = MessageReceiver::from(StreamMessageReceiver::new(stream, message_sender.clone()));

		run_connection(application_context, message_sender, message_receiver)
	})
}

fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
	let details = panic
		.downcast_ref::<String>()
		.map(String::as_str)
		.or_else(|| panic.downcast_ref::<&str>().copied())
		.unwrap_or("unknown panic");
	error!("Request handler panicked: {details}");

	ApiErrorResponse::internal_server_error().into_response()
}
