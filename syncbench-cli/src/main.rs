fn main() -> anyhow::Result<()> {
    syncbench_cli::run()
}
