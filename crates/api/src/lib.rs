//! ToDo gRPC service library.
//!
//! Exposes the generated protobuf bindings, configuration, error mapping,
//! the service implementation and the transport bootstrap so integration
//! tests and both binaries can share them.

pub mod config;
pub mod convert;
pub mod error;
pub mod server;
pub mod service;
pub mod telemetry;

/// Protobuf messages and gRPC stubs generated from `proto/todo/v1`.
pub mod proto {
    tonic::include_proto!("todo.v1");
}
