fn main() {
    uniffi::generate_scaffolding("src/jitsi.udl").unwrap();
}
