fn main() -> anyhow::Result<()> {
    hanzi_drill::run()
}
