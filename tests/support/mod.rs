pub mod truthlens_env;
