mod entropy_quality;
mod masked_output;
