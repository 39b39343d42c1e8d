use probemap::{Double, DoubleTable, Probe, Serialized, SlotTable, TableConfig};

fn main() -> probemap::Result<()> {
    let mut map: DoubleTable<&str, i32> =
        DoubleTable::with_config(TableConfig::new(Double).with_capacity(7))?;

    let people = [
        ("David", 99),
        ("Anna", 42),
        ("Harut", 99),
        ("Tiko", 57),
        ("A", 32),
        ("B", 46),
        ("c", 78),
        ("d", 65),
        ("e", 25),
        ("f", 45),
        ("g", 54),
        ("h", 11),
        ("i", 22),
    ];
    for (name, v) in people {
        let ins = map.set_debug(name, v);
        if ins.resized() {
            println!("grew to {} slots while inserting {name}", map.capacity());
        }
    }

    println!("{:?}", map.get("Harut"));
    println!("{:?}", map.get("Tiko"));
    println!("{:?}", map.get("NoSuch"));

    println!("{}", map.has("Anna"));
    println!("{}", map.has("Unknown"));

    map.set("Harut", 100);
    println!("{:?}", map.get("Harut"));

    println!("{}", map.delete("Anna"));
    println!("{}", map.has("Anna"));
    println!("{}", map.delete("Anna"));

    print!("{}", map.layout());

    let mut mixed: SlotTable<Option<i64>, &str> =
        SlotTable::with_config(TableConfig::new(Probe::Double))?;
    mixed.set(Some(123), "number-key");
    mixed.set(None, "is-null");
    println!("{:?}", mixed.get(&Some(123)));
    println!("{:?}", mixed.get(&None));

    let mut points: SlotTable<Serialized<(i32, i32)>, &str> = SlotTable::new();
    points.set(Serialized::new((1, 2))?, "a");
    println!("{:?}", points.get(&Serialized::new((1, 2))?));

    for (k, v) in &map {
        println!("{k} {v}");
    }

    map.clear();
    print!("{}", map.layout());

    Ok(())
}
