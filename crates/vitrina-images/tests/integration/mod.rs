mod fs_resolution;
mod probe_resolver;
