fn main() {
    println!("cargo:rerun-if-changed=proto/fonts_public.proto");

    protobuf_codegen::Codegen::new()
        .pure()
        .includes(["proto"])
        .input("proto/fonts_public.proto")
        .cargo_out_dir("protos")
        .run_from_script();
}
