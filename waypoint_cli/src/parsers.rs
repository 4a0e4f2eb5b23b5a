use waypoint_core::generator;

pub fn parse_node_count(input: &str) -> Result<usize, String> {
    generator::parse_node_count(input).map_err(|err| err.to_string())
}
