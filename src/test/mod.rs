mod convergence;
mod viz_snapshot;
