use crate::tracing_targets;

tracing_targets! {
    MAIN = "main",
    MESH = "mesh",
    PDF = "pdf",
}
