//! Compiles `proto/todo/v1/todo_service.proto` into the message types, the
//! server trait and the client stub used by `todo_api::proto`.

use std::path::PathBuf;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let proto_file = "proto/todo/v1/todo_service.proto";
    println!("cargo:rerun-if-changed={proto_file}");
    println!("cargo:rerun-if-env-changed=PROTOC");

    // Fall back to the bundled protoc when none is installed.
    if std::env::var_os("PROTOC").is_none() {
        std::env::set_var("PROTOC", protoc_bin_vendored::protoc_bin_path()?);
    }
    let well_known_types = protoc_bin_vendored::include_path()?;

    tonic_prost_build::configure()
        .build_server(true)
        .build_client(true)
        .compile_protos(&[PathBuf::from(proto_file)], &[PathBuf::from("proto"), well_known_types])?;

    Ok(())
}
