mod adjugate;
mod pipeline;
