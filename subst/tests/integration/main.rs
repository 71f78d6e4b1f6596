mod custom_values;
mod example_protocol;
mod failures;
mod patterns;
mod properties;
mod query_properties;
mod skip_fns;
