/// Receiver of the per-frame uniform set, typically a shader program wrapper.
///
/// Names are the uniform identifiers the render stage declares.
pub trait UniformSink {
    fn set_bool(&mut self, name: &str, value: bool);
    fn set_int(&mut self, name: &str, value: i32);
    fn set_float(&mut self, name: &str, value: f32);
    fn set_ivec2(&mut self, name: &str, value: [i32; 2]);
    fn set_dvec2(&mut self, name: &str, value: [f64; 2]);
    fn set_vec3_array(&mut self, name: &str, values: &[[f32; 3]]);
}
