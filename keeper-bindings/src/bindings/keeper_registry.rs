//! Bindings for the keeper registry, version 1.2.

use alloy::sol;

/// JSON ABI of `KeeperRegistry`, as emitted by the Solidity compiler.
pub const ABI: &str = include_str!("../../abi/KeeperRegistry.json");

sol! {
    #![sol(all_derives)]
    /// Keeper registry v1.2: upkeep registration, funding and payment of
    /// keepers performing upkeeps.
    #[allow(missing_docs)]
    #[sol(rpc, all_derives, bytecode = "60e06040523480156200001157600080fd5b50604051620055f6380380620055f68339810160408190526200003491620005a5565b33806000816200008b5760405162461bcd60e51b815260206004820152601860248201527f43616e6e6f7420736574206f776e657220746f207a65726f000000000000000060448201526064015b60405180910390fd5b600080546001600160a01b0319166001600160a01b0384811691909117909155811615620000be57620000be81620000fe565b50506001600255506003805460ff191690556001600160a01b0380851660805283811660a052821660c052620000f481620001a9565b50505050620007f0565b336001600160a01b03821603620001585760405162461bcd60e51b815260206004820152601760248201527f43616e6e6f74207472616e7366657220746f2073656c66000000000000000000604482015260640162000082565b600180546001600160a01b0319166001600160a01b0383811691821790925560008054604051929316917fed8889f560326eb138920d842192f0eb3dd22b4f139c87a2c57538e05bae12789190a350565b620001b36200049e565b600d5460e082015163ffffffff91821691161015620001e557604051630e6af04160e21b815260040160405180910390fd5b604051806101200160405280826000015163ffffffff168152602001826020015163ffffffff168152602001826040015162ffffff168152602001826060015163ffffffff168152602001826080015162ffffff1681526020018260a0015161ffff1681526020018260c001516001600160601b031681526020018260e0015163ffffffff168152602001600c60010160049054906101000a900463ffffffff1663ffffffff16815250600c60008201518160000160006101000a81548163ffffffff021916908363ffffffff16021790555060208201518160000160046101000a81548163ffffffff021916908363ffffffff16021790555060408201518160000160086101000a81548162ffffff021916908362ffffff160217905550606082015181600001600b6101000a81548163ffffffff021916908363ffffffff160217905550608082015181600001600f6101000a81548162ffffff021916908362ffffff16021790555060a08201518160000160126101000a81548161ffff021916908361ffff16021790555060c08201518160000160146101000a8154816001600160601b0302191690836001600160601b0316021790555060e08201518160010160006101000a81548163ffffffff021916908363ffffffff1602179055506101008201518160010160046101000a81548163ffffffff021916908363ffffffff160217905550905050806101000151600e81905550806101200151600f81905550806101400151601260006101000a8154816001600160a01b0302191690836001600160a01b03160217905550806101600151601360006101000a8154816001600160a01b0302191690836001600160a01b031602179055507ffe125a41957477226ba20f85ef30a4024ea3bb8d066521ddc16df3f2944de32581604051620004939190620006f1565b60405180910390a150565b6000546001600160a01b03163314620004fa5760405162461bcd60e51b815260206004820152601660248201527f4f6e6c792063616c6c61626c65206279206f776e657200000000000000000000604482015260640162000082565b565b80516001600160a01b03811681146200051457600080fd5b919050565b60405161018081016001600160401b03811182821017156200054b57634e487b7160e01b600052604160045260246000fd5b60405290565b805163ffffffff811681146200051457600080fd5b805162ffffff811681146200051457600080fd5b805161ffff811681146200051457600080fd5b80516001600160601b03811681146200051457600080fd5b6000806000808486036101e0811215620005be57600080fd5b620005c986620004fc565b9450620005d960208701620004fc565b9350620005e960408701620004fc565b925061018080605f19830112156200060057600080fd5b6200060a62000519565b91506200061a6060880162000551565b82526200062a6080880162000551565b60208301526200063d60a0880162000566565b60408301526200065060c0880162000551565b60608301526200066360e0880162000566565b6080830152610100620006788189016200057a565b60a08401526101206200068d818a016200058d565b60c0850152610140620006a2818b0162000551565b60e0860152610160808b015184870152848b015183870152620006c96101a08c01620004fc565b82870152620006dc6101c08c01620004fc565b90860152509699959850939650909450505050565b815163ffffffff1681526101808101602083015162000718602084018263ffffffff169052565b50604083015162000730604084018262ffffff169052565b50606083015162000749606084018263ffffffff169052565b50608083015162000761608084018262ffffff169052565b5060a08301516200077860a084018261ffff169052565b5060c08301516200079460c08401826001600160601b03169052565b5060e0830151620007ad60e084018263ffffffff169052565b5061010083810151908301526101208084015190830152610140808401516001600160a01b03908116918401919091526101609384015116929091019190915290565b60805160a05160c051614d90620008666000396000818161034e01526133b0015260008181610479015261347501526000818161027b01528181610b3c01528181610d770152818161143c015281816117aa0152818161187201528181611b2501528181611dbd0152611e370152614d906000f3fe608060405234801561001057600080fd5b50600436106101dc5760003560e01c806393f0c1fc11610105578063b7fdb4361161009d578063b7fdb436146104c9578063c41b813a146104dc578063c7c3a19a14610500578063c804802214610527578063da5c67411461053a578063eb5dcd6c1461055b578063ef47a0ce1461056e578063f2fde38b14610581578063faa3e9961461059457600080fd5b806393f0c1fc14610408578063948108f714610428578063a4c0ed361461043b578063a710b2211461044e578063a72aa27e14610461578063ad17836114610474578063b121e1471461049b578063b657bc9c146104ae578063b79550be146104c157600080fd5b80635c975abb116101785780635c975abb14610385578063744bfe611461039c57806379ba5097146103af5780637bbaf1ea146103b75780637d9b97e0146103ca5780638456cb59146103d257806385c1b0ba146103da5780638da5cb5b146103ed5780638e86139b146103f557600080fd5b806306e3b632146101e1578063181f5a771461020a5780631865c57d1461024a578063187256e8146102615780631b6b6d23146102765780631e12b8a5146102aa5780633f4ba83a146103415780634584a4191461034957806348013d7b14610370575b600080fd5b6101f46101ef366004613ac0565b6105cd565b6040516102019190613ae2565b60405180910390f35b61023d6040518060400160405280601481526020017304b6565706572526567697374727920312e322e360641b81525081565b6040516102019190613b82565b6102526106b2565b60405161020193929190613c91565b61027461026f366004613d41565b61090c565b005b61029d7f000000000000000000000000000000000000000000000000000000000000000081565b6040516102019190613d7c565b6103136102b8366004613d90565b6001600160a01b0390811660009081526008602090815260409182902082516060810184528154948516808252600160a01b9095046001600160601b031692810183905260019091015460ff16151592018290529192909190565b604080516001600160a01b03909416845291151560208401526001600160601b031690820152606001610201565b610274610952565b61029d7f000000000000000000000000000000000000000000000000000000000000000081565b610378600081565b6040516102019190613dd5565b60035460ff165b6040519015158152602001610201565b6102746103aa366004613de3565b610964565b610274610bc2565b61038c6103c5366004613e57565b610c71565b610274610cf0565b610274610df5565b6102746103e8366004613ee6565b610e05565b61029d6114c6565b610274610403366004613f39565b6114d5565b61041b610416366004613f7a565b6116ab565b6040516102019190613f93565b610274610436366004613fbe565b6116df565b610274610449366004613fe1565b611867565b61027461045c36600461403a565b6119d0565b61027461046f366004614078565b611ba4565b61029d7f000000000000000000000000000000000000000000000000000000000000000081565b6102746104a9366004613d90565b611ccd565b61041b6104bc366004613f7a565b611d7a565b610274611d9b565b6102746104d736600461409b565b611e90565b6104ef6104ea366004613de3565b6120dd565b6040516102019594939291906140fa565b61051361050e366004613f7a565b6122f3565b604051610201989796959493929190614131565b610274610535366004613f7a565b612461565b61054d6105483660046141aa565b6125c5565b604051908152602001610201565b61027461056936600461403a565b612759565b61027461057c3660046142d5565b612839565b61027461058f366004613d90565b612b29565b6105c06105a2366004613d90565b6001600160a01b03166000908152600b602052604090205460ff1690565b60405161020191906143b3565b606060006105db6005612b3d565b90508084106105fd57604051631390f2a160e01b815260040160405180910390fd5b826000036106125761060f84826143e3565b92505b6000836001600160401b0381111561062c5761062c61421f565b604051908082528060200260200182016040528015610655578160200160208202803683370190505b50905060005b848110156106a75761067861067082886143fa565b600590612b47565b82828151811061068a5761068a614412565b60209081029190910101528061069f81614428565b91505061065b565b509150505b92915050565b6040805160808101825260008082526020820181905291810182905260608101919091526040805161018081018252600080825260208201819052918101829052606081018290526080810182905260a0810182905260c0810182905260e081018290526101008101829052610120810182905261014081018290526101608101919091526040805161012081018252600c5463ffffffff8082168352600160201b808304821660208086019190915262ffffff600160401b8504811686880152600160581b85048416606087810191909152600160781b8604909116608087015261ffff600160901b86041660a08701526001600160601b03600160a01b909504851660c0870152600d5480851660e0880152929092049092166101008501819052875260105490921690860152601154928501929092526107f56005612b3d565b606080860191909152815163ffffffff908116855260208084015182168187015260408085015162ffffff90811682890152858501518416948801949094526080808601519094169387019390935260a08085015161ffff169087015260c0808501516001600160601b03169087015260e08085015190921691860191909152600e54610100860152600f546101208601526012546001600160a01b03908116610140870152601354166101608601526004805483518184028101840190945280845287938793909183918301828280156108f957602002820191906000526020600020905b81546001600160a01b031681526001909101906020018083116108db575b5050505050905093509350935050909192565b610914612b5a565b6001600160a01b0382166000908152600b60205260409020805482919060ff1916600183600381111561094957610949613dab565b02179055505050565b61095a612b5a565b610962612bad565b565b806001600160a01b03811661098c57604051634e46966960e11b815260040160405180910390fd5b6000838152600760205260409020600201548390600160601b90046001600160a01b031633146109cf5760405163523e0b8360e11b815260040160405180910390fd5b60008481526007602052604090206001015443600160201b9091046001600160401b03161115610a15576040516001627b1a2360e01b0319815260040160405180910390fd5b600c54600085815260076020526040812080546002909101546001600160601b03600160a01b9094048416939182169291169083821015610a7957610a5a8285614441565b9050826001600160601b0316816001600160601b03161115610a795750815b6000610a858285614441565b60008a815260076020526040902080546001600160601b0319169055601054909150610abb9083906001600160601b0316614469565b601080546001600160601b0319166001600160601b03928316179055601154610ae6918316906143e3565b60115560405189907ff3b5906e5672f3e524854103bcafbbdba80dbdfeca2c35e116127b1060a6831890610b1d9084908c90614494565b60405180910390a260405163a9059cbb60e01b81526001600160a01b037f0000000000000000000000000000000000000000000000000000000000000000169063a9059cbb90610b73908b9085906004016144b6565b6020604051808303816000875af1158015610b92573d6000803e3d6000fd5b505050506040513d601f19601f82011682018060405250810190610bb691906144e8565b50505050505050505050565b6001546001600160a01b03163314610c1a5760405162461bcd60e51b815260206004820152601660248201527526bab9ba10313290383937b837b9b2b21037bbb732b960511b60448201526064015b60405180910390fd5b60008054336001600160a01b0319808316821784556001805490911690556040516001600160a01b0390921692909183917f8be0079c531659141344cd1fd0a4f28419497f9722a3daafe3b4186f6b6457e091a350565b6000610c7f60035460ff1690565b15610c9c5760405162461bcd60e51b8152600401610c1190614503565b610ce8610ce3338686868080601f01602080910402602001604051908101604052809392919081815260200183838082843760009201919091525060019250612c3a915050565b612d15565b949350505050565b610cf8612b5a565b6010546011546001600160601b0390911690610d159082906143e3565b601155601080546001600160601b03191690556040517f1d07d0b0be43d3e5fee41a80b579af370affee03fa595bf56d5d4c19328162f190610d58908390613f93565b60405180910390a160405163a9059cbb60e01b81526001600160a01b037f0000000000000000000000000000000000000000000000000000000000000000169063a9059cbb90610dae90339085906004016144b6565b6020604051808303816000875af1158015610dcd573d6000803e3d6000fd5b505050506040513d601f19601f82011682018060405250810190610df191906144e8565b5050565b610dfd612b5a565b610962613085565b60016001600160a01b0382166000908152600b602052604090205460ff166003811115610e3457610e34613dab565b14158015610e6f575060036001600160a01b0382166000908152600b602052604090205460ff166003811115610e6c57610e6c613dab565b14155b15610e8d576040516303afbb0f60e21b815260040160405180910390fd5b6012546001600160a01b0316610eb65760405163d12d7d8d60e01b815260040160405180910390fd5b6000829003610ed857604051632c2fc94160e01b815260040160405180910390fd5b60006007600085856000818110610ef157610ef1614412565b905060200201358152602001908152602001600020600201600c9054906101000a90046001600160a01b031690506000610f296114c6565b336001600160a01b039182168114925090831614801590610f48575080155b15610f6657604051637dedc72b60e11b815260040160405180910390fd5b6000610f7061395e565b600080876001600160401b03811115610f8b57610f8b61421f565b604051908082528060200260200182016040528015610fbe57816020015b6060815260200190600190039081610fa95790505b5090506000886001600160401b03811115610fdb57610fdb61421f565b60405190808252806020026020018201604052801561101457816020015b61100161395e565b815260200190600190039081610ff95790505b50905060005b8981101561129f578a8a8281811061103457611034614412565b60209081029290920135600081815260078452604090819020815160e08101835281546001600160601b0380821683526001600160a01b03600160601b92839004811698840198909852600184015463ffffffff8116958401959095526001600160401b03600160201b8604166060840152938190048716608083015260029092015492831660a08201529104841660c082018190529199509750918a1690911490506110f45760405163523e0b8360e11b815260040160405180910390fd5b60608501516001600160401b039081161461112257604051633425886760e21b815260040160405180910390fd5b8482828151811061113557611135614412565b6020026020010181905250600a6000878152602001908152602001600020805461115e9061452d565b80601f016020809104026020016040519081016040528092919081815260200182805461118a9061452d565b80156111d75780601f106111ac576101008083540402835291602001916111d7565b820191906000526020600020905b8154815290600101906020018083116111ba57829003601f168201915b50505050508382815181106111ee576111ee614412565b6020908102919091010152845161120e906001600160601b0316856143fa565b600087815260076020908152604080832083815560018101849055600201839055600a9091528120919550611243919061399a565b61124e6005876130dd565b50857fb38647142fbb1ea4c000fc4569b37a4e9a9f6313317b84ee3e5326c1a6cd06ff86600001518b604051611285929190614494565b60405180910390a28061129781614428565b91505061101a565b50826011546112ae91906143e3565b6011556040516000906112cb908c908c90859087906020016145bc565b6040516020818303038152906040529050886001600160a01b0316638e86139b601260009054906101000a90046001600160a01b03166001600160a01b031663c71249ab60008d6001600160a01b03166348013d7b6040518163ffffffff1660e01b81526004016020604051808303816000875af1158015611351573d6000803e3d6000fd5b505050506040513d601f19601f8201168201806040525081019061137591906146d1565b866040518463ffffffff1660e01b8152600401611394939291906146f2565b600060405180830381865afa1580156113b1573d6000803e3d6000fd5b505050506040513d6000823e601f3d908101601f191682016040526113d99190810190614790565b6040518263ffffffff1660e01b81526004016113f59190613b82565b600060405180830381600087803b15801561140f57600080fd5b505af1158015611423573d6000803e3d6000fd5b505060405163a9059cbb60e01b81526001600160a01b037f000000000000000000000000000000000000000000000000000000000000000016925063a9059cbb9150611475908c9088906004016147c4565b6020604051808303816000875af1158015611494573d6000803e3d6000fd5b505050506040513d601f19601f820116820180604052508101906114b891906144e8565b505050505050505050505050565b6000546001600160a01b031690565b6002336000908152600b602052604090205460ff1660038111156114fb576114fb613dab565b1415801561152d57506003336000908152600b602052604090205460ff16600381111561152a5761152a613dab565b14155b1561154b576040516303afbb0f60e21b815260040160405180910390fd5b6000808061155b848601866149c5565b92509250925060005b83518110156116a35761162184828151811061158257611582614412565b602002602001015184838151811061159c5761159c614412565b6020026020010151608001518584815181106115ba576115ba614412565b6020026020010151604001518685815181106115d8576115d8614412565b602002602001015160c001518786815181106115f6576115f6614412565b60200260200101516000015187878151811061161457611614614412565b60200260200101516130e9565b83818151811061163357611633614412565b60200260200101517f74931a144e43a50694897f241d973aecb5024c0e910f9bb80a163ea3c1cf5a7184838151811061166e5761166e614412565b60200260200101516000015133604051611689929190614494565b60405180910390a28061169b81614428565b915050611564565b505050505050565b60008060006116b861337d565b9150915060006116c9836000613540565b90506116d6858284613576565b95945050505050565b6000828152600760205260409020600101548290600160201b90046001600160401b039081161461172357604051633425886760e21b815260040160405180910390fd5b6000838152600760205260409020546117469083906001600160601b0316614469565b600084815260076020526040902080546001600160601b0319166001600160601b0392831617905560115461177d918416906143fa565b6011556040516323b872dd60e01b81523360048201523060248201526001600160601b03831660448201527f00000000000000000000000000000000000000000000000000000000000000006001600160a01b0316906323b872dd906064016020604051808303816000875af11580156117fb573d6000803e3d6000fd5b505050506040513d601f19601f8201168201806040525081019061181f91906144e8565b50336001600160a01b0316837fafd24114486da8ebfc32f3626dada8863652e187461aa74d4bfa7348915062038460405161185a9190613f93565b60405180910390a3505050565b336001600160a01b037f000000000000000000000000000000000000000000000000000000000000000016146118b05760405163c8bad78d60e01b815260040160405180910390fd5b602081146118d157604051630dfe930960e41b815260040160405180910390fd5b60006118df82840184613f7a565b600081815260076020526040902060010154909150600160201b90046001600160401b039081161461192457604051633425886760e21b815260040160405180910390fd5b6000818152600760205260409020546119479085906001600160601b0316614469565b600082815260076020526040902080546001600160601b0319166001600160601b03929092169190911790556011546119819085906143fa565b601181905550846001600160a01b0316817fafd24114486da8ebfc32f3626dada8863652e187461aa74d4bfa734891506203866040516119c19190613f93565b60405180910390a35050505050565b806001600160a01b0381166119f857604051634e46966960e11b815260040160405180910390fd5b6001600160a01b0383811660009081526008602090815260409182902082516060810184528154948516808252600160a01b9095046001600160601b0316928101929092526001015460ff16151591810191909152903314611a6d5760405163cebf515b60e01b815260040160405180910390fd5b6001600160a01b0380851660009081526008602090815260409091208054909216909155810151601154611aaa916001600160601b0316906143e3565b601181905550826001600160a01b031681602001516001600160601b0316856001600160a01b03167f9819093176a1851202c7bcfa46845809b4e47c261866550e94ed3775d2f4069833604051611b019190613d7c565b60405180910390a4602081015160405163a9059cbb60e01b81526001600160a01b037f0000000000000000000000000000000000000000000000000000000000000000169163a9059cbb91611b5a9187916004016144b6565b6020604051808303816000875af1158015611b79573d6000803e3d6000fd5b505050506040513d601f19601f82011682018060405250810190611b9d91906144e8565b5050505050565b6000828152600760205260409020600101548290600160201b90046001600160401b0390811614611be857604051633425886760e21b815260040160405180910390fd5b6000838152600760205260409020600201548390600160601b90046001600160a01b03163314611c2b5760405163523e0b8360e11b815260040160405180910390fd5b6108fc8363ffffffff161080611c4c5750600d5463ffffffff908116908416115b15611c6a576040516314c237fb60e01b815260040160405180910390fd5b600084815260076020908152604091829020600101805463ffffffff191663ffffffff8716908117909155915191825285917fc24c07e655ce79fba8a589778987d3c015bc6af1632bb20cf9182e02a65d972c910160405180910390a250505050565b6001600160a01b03818116600090815260096020526040902054163314611d07576040516333a973d560e11b815260040160405180910390fd5b6001600160a01b0381811660008181526008602090815260408083208054336001600160a01b031980831682179093556009909452828520805490921690915590519416939092849290917f78af32efdcad432315431e9b03d27e6cd98fb79c405fdc5af7c1714d9c0f75b39190a45050565b6000818152600760205260408120600101546106ac9063ffffffff166116ab565b611da3612b5a565b6040516370a0823160e01b81526000906001600160a01b037f000000000000000000000000000000000000000000000000000000000000000016906370a0823190611df2903090600401613d7c565b602060405180830381865afa158015611e0f573d6000803e3d6000fd5b505050506040513d601f19601f82011682018060405250810190611e339190614aa1565b90507f00000000000000000000000000000000000000000000000000000000000000006001600160a01b031663a9059cbb3360115484611e7391906143e3565b6040518363ffffffff1660e01b8152600401610dae9291906147c4565b611e98612b5a565b8281141580611ea75750600283105b15611ec5576040516367aa603560e11b815260040160405180910390fd5b60005b600454811015611f2657600060048281548110611ee757611ee7614412565b60009182526020808320909101546001600160a01b031682526008905260409020600101805460ff191690555080611f1e81614428565b915050611ec8565b5060005b8381101561208c576000858583818110611f4657611f46614412565b9050602002016020810190611f5b9190613d90565b6001600160a01b03808216600090815260086020526040812080549394509290911690868686818110611f9057611f90614412565b9050602002016020810190611fa59190613d90565b90506001600160a01b0381161580611ff757506001600160a01b03821615801590611fe25750806001600160a01b0316826001600160a01b031614155b8015611ff757506001600160a01b0381811614155b1561201557604051631670f44760e31b815260040160405180910390fd5b600183015460ff161561203b57604051630d5f433160e21b815260040160405180910390fd5b6001838101805460ff191690911790556001600160a01b03818116146120755782546001600160a01b0319166001600160a01b0382161783555b50505050808061208490614428565b915050611f2a565b50612099600485856139d4565b507f056264c94f28bb06c99d13f0446eb96c67c215d8d707bce2655a98ddf1c0b71f848484846040516120cf9493929190614b01565b60405180910390a150505050565b60606000806000806120ed613639565b6000878152600760209081526040808320815160e08101835281546001600160601b0380821683526001600160a01b03600160601b92839004811684880152600185015463ffffffff8116858801526001600160401b03600160201b82041660608601528390048116608085015260029094015490811660a08401520490911660c08201528a8452600a9092528083209051919291636e04ff0d60e01b9161219791602401614b33565b604051602081830303815290604052906001600160e01b0319166020820180516001600160e01b038381831617835250505050905060008083608001516001600160a01b0316600c600001600b9054906101000a900463ffffffff1663ffffffff16846040516122079190614bda565b60006040518083038160008787f1925050503d8060008114612245576040519150601f19603f3d011682016040523d82523d6000602084013e61224a565b606091505b50915091508161226f57806040516396c3623560e01b8152600401610c119190613b82565b808060200190518101906122839190614bf6565b99509150816122a55760405163865676e360e01b815260040160405180910390fd5b60006122b48b8d8c6000612c3a565b90506122c98582600001518360600151613658565b6060810151608082015160a083015160c0909301519b9e919d509b50909998509650505050505050565b6000818152600760209081526040808320815160e08101835281546001600160601b0380821683526001600160a01b03600160601b928390048116848801908152600186015463ffffffff81168689018190526001600160401b03600160201b83041660608881019182529287900485166080890181905260029099015495861660a089019081529690950490931660c087019081528b8b52600a9099529689208551915198519351945181548b9a8b998a998a998a998a99929893979296929593949390929086906123c59061452d565b80601f01602080910402602001604051908101604052809291908181526020018280546123f19061452d565b801561243e5780601f106124135761010080835404028352916020019161243e565b820191906000526020600020905b81548152906001019060200180831161242157829003601f168201915b505050505095509850985098509850985098509850985050919395975091939597565b6000818152600760205260408120600101546001600160401b03600160201b90910481169190821415906124936114c6565b6001600160a01b0316336001600160a01b03161490508180156124c857508080156124c6575043836001600160401b0316115b155b156124e657604051631f7806af60e31b815260040160405180910390fd5b801580156125155750600084815260076020526040902060020154600160601b90046001600160a01b03163314155b1561253357604051637dedc72b60e11b815260040160405180910390fd5b4381612547576125446032826143fa565b90505b600085815260076020526040902060010180546bffffffffffffffff000000001916600160201b6001600160401b038416021790556125876005866130dd565b506040516001600160401b0382169086907f91cb3bb75cfbd718bbfccc56b7f53d92d7048ef4ca39a3b7b7c6d4af1f79118190600090a35050505050565b60006125cf6114c6565b6001600160a01b0316336001600160a01b0316141580156125fb57506013546001600160a01b03163314155b156126195760405163d48b678b60e01b815260040160405180910390fd5b6126246001436143e3565b600d5460408051924060208401523060601b6001600160601b03191690830152600160201b900460e01b6001600160e01b03191660548201526058016040516020818303038152906040528051906020012060001c90506126c081878787600088888080601f0160208091040260200160405190810160405280939291908181526020018383808284376000920191909152506130e992505050565b600d8054600160201b900463ffffffff169060046126dd83614c43565b91906101000a81548163ffffffff021916908363ffffffff16021790555050807fbae366358c023f887e791d7a62f2e4316f1026bd77f6fb49501a917b3bc5d012868660405161274892919063ffffffff9290921682526001600160a01b0316602082015260400190565b60405180910390a295945050505050565b6001600160a01b038281166000908152600860205260409020541633146127935760405163cebf515b60e01b815260040160405180910390fd5b336001600160a01b038216036127bc57604051638c8728c760e01b815260040160405180910390fd5b6001600160a01b03828116600090815260096020526040902054811690821614610df1576001600160a01b0382811660008181526009602052604080822080546001600160a01b0319169486169485179055513392917f84f7c7c80bb8ed2279b4aab5f61cd05e6374073d38f46d7f32de8c30e9e3836791a45050565b612841612b5a565b600d5460e082015163ffffffff9182169116101561287257604051630e6af04160e21b815260040160405180910390fd5b604051806101200160405280826000015163ffffffff168152602001826020015163ffffffff168152602001826040015162ffffff168152602001826060015163ffffffff168152602001826080015162ffffff1681526020018260a0015161ffff1681526020018260c001516001600160601b031681526020018260e0015163ffffffff168152602001600c60010160049054906101000a900463ffffffff1663ffffffff16815250600c60008201518160000160006101000a81548163ffffffff021916908363ffffffff16021790555060208201518160000160046101000a81548163ffffffff021916908363ffffffff16021790555060408201518160000160086101000a81548162ffffff021916908362ffffff160217905550606082015181600001600b6101000a81548163ffffffff021916908363ffffffff160217905550608082015181600001600f6101000a81548162ffffff021916908362ffffff16021790555060a08201518160000160126101000a81548161ffff021916908361ffff16021790555060c08201518160000160146101000a8154816001600160601b0302191690836001600160601b0316021790555060e08201518160010160006101000a81548163ffffffff021916908363ffffffff1602179055506101008201518160010160046101000a81548163ffffffff021916908363ffffffff160217905550905050806101000151600e81905550806101200151600f81905550806101400151601260006101000a8154816001600160a01b0302191690836001600160a01b03160217905550806101600151601360006101000a8154816001600160a01b0302191690836001600160a01b031602179055507ffe125a41957477226ba20f85ef30a4024ea3bb8d066521ddc16df3f2944de32581604051612b1e9190614c66565b60405180910390a150565b612b31612b5a565b612b3a816136f9565b50565b60006106ac825490565b6000612b53838361379c565b9392505050565b6000546001600160a01b031633146109625760405162461bcd60e51b815260206004820152601660248201527527b7363c9031b0b63630b1363290313c9037bbb732b960511b6044820152606401610c11565b60035460ff16612bf65760405162461bcd60e51b815260206004820152601460248201527314185d5cd8589b194e881b9bdd081c185d5cd95960621b6044820152606401610c11565b6003805460ff191690557f5db9ee0a495bf2e6ff9c91a7834c1ba4fdd244a5e8aa4e537bd38aeae4b073aa335b604051612c309190613d7c565b60405180910390a1565b612c836040518060e0016040528060006001600160a01b031681526020016000815260200160608152602001600081526020016000815260200160008152602001600081525090565b60008481526007602052604081206001015463ffffffff169080612ca561337d565b915091506000612cb58387613540565b90506000612cc4858385613576565b6040805160e0810182526001600160a01b038d168152602081018c90529081018a90526001600160601b03909116606082015260808101959095525060a084015260c0830152509050949350505050565b60006002805403612d685760405162461bcd60e51b815260206004820152601f60248201527f5265656e7472616e637947756172643a207265656e7472616e742063616c6c006044820152606401610c11565b600280556020828101516000818152600790925260409091206001015443600160201b9091046001600160401b031611612db557604051633425886760e21b815260040160405180910390fd5b602080840151600090815260078252604090819020815160e08101835281546001600160601b0380821683526001600160a01b03600160601b92839004811696840196909652600184015463ffffffff8116958401959095526001600160401b03600160201b860416606080850191909152948290048616608084015260029093015492831660a083015290910490921660c0830152845190850151612e5c918391613658565b60005a90506000634585e33b60e01b8660400151604051602401612e809190613b82565b604051602081830303815290604052906001600160e01b0319166020820180516001600160e01b0383818316178352505050509050612ec886608001518460800151836137c6565b94505a612ed590836143e3565b91506000612eec838860a001518960c00151613576565b602080890151600090815260079091526040902054909150612f189082906001600160601b0316614441565b6020888101805160009081526007909252604080832080546001600160601b0319166001600160601b0395861617905590518252902060020154612f5e91839116614469565b60208881018051600090815260078352604080822060020180546001600160601b0319166001600160601b039687161790558b519251825280822080548616600160601b6001600160a01b03958616021790558b5190921681526008909252902054612fd3918391600160a01b900416614469565b6008600089600001516001600160a01b03166001600160a01b0316815260200190815260200160002060000160146101000a8154816001600160601b0302191690836001600160601b0316021790555086600001516001600160a01b031686151588602001517fcaacad83e47cc45c280d487ec84184eee2fa3b54ebaa393bda7549f13da228f6848b6040015160405161306e929190614c75565b60405180910390a450505050506001600255919050565b60035460ff16156130a85760405162461bcd60e51b8152600401610c1190614503565b6003805460ff191660011790557f62e78cea01bee320cd4e420270b5ea74000d11b0c9f74754ebdbfc544b05a258612c233390565b6000612b538383613812565b60035460ff161561310c5760405162461bcd60e51b8152600401610c1190614503565b6001600160a01b0385163b613134576040516309ee12d560e01b815260040160405180910390fd5b6108fc8463ffffffff1610806131555750600d5463ffffffff908116908516115b15613173576040516314c237fb60e01b815260040160405180910390fd5b6040518060e00160405280836001600160601b0316815260200160006001600160a01b031681526020018563ffffffff1681526020016001600160401b0380168152602001866001600160a01b0316815260200160006001600160601b03168152602001846001600160a01b03168152506007600088815260200190815260200160002060008201518160000160006101000a8154816001600160601b0302191690836001600160601b03160217905550602082015181600001600c6101000a8154816001600160a01b0302191690836001600160a01b0316021790555060408201518160010160006101000a81548163ffffffff021916908363ffffffff16021790555060608201518160010160046101000a8154816001600160401b0302191690836001600160401b03160217905550608082015181600101600c6101000a8154816001600160a01b0302191690836001600160a01b0316021790555060a08201518160020160006101000a8154816001600160601b0302191690836001600160601b0316021790555060c082015181600201600c6101000a8154816001600160a01b0302191690836001600160a01b03160217905550905050816001600160601b031660115461334691906143fa565b6011556000868152600a60209081526040909120825161336892840190613a37565b50613374600587613905565b50505050505050565b6000806000600c600001600f9054906101000a900462ffffff1662ffffff1690506000808263ffffffff161190506000807f00000000000000000000000000000000000000000000000000000000000000006001600160a01b031663feaf968c6040518163ffffffff1660e01b815260040160a060405180830381865afa15801561340c573d6000803e3d6000fd5b505050506040513d601f19601f820116820180604052508101906134309190614cb3565b509450909250849150508015613454575061344b82426143e3565b8463ffffffff16105b80613460575060008113155b1561346f57600e549550613473565b8095505b7f00000000000000000000000000000000000000000000000000000000000000006001600160a01b031663feaf968c6040518163ffffffff1660e01b815260040160a060405180830381865afa1580156134d1573d6000803e3d6000fd5b505050506040513d601f19601f820116820180604052508101906134f59190614cb3565b509450909250849150508015613519575061351082426143e3565b8463ffffffff16105b80613525575060008113155b1561353457600f549450613538565b8094505b505050509091565b600c5460009061355b90600160901b900461ffff1684614d03565b90508180156135695750803a105b156106ac57503a92915050565b60008061358662013880866143fa565b6135909085614d03565b600c549091506000906135ad9063ffffffff16633b9aca006143fa565b600c549091506000906135d290600160201b900463ffffffff1664e8d4a51000614d03565b85836135e286633b9aca00614d03565b6135ec9190614d03565b6135f69190614d22565b61360091906143fa565b90506b033b2e3c9fd0803ce800000081111561362f5760405163156baa3d60e11b815260040160405180910390fd5b9695505050505050565b32156109625760405163b60ac5db60e01b815260040160405180910390fd5b6001600160a01b03821660009081526008602052604090206001015460ff16613694576040516319f759fb60e31b815260040160405180910390fd5b82516001600160601b03168111156136bf5760405163356680b760e01b815260040160405180910390fd5b816001600160a01b031683602001516001600160a01b0316036136f457604051621af04160e61b815260040160405180910390fd5b505050565b336001600160a01b0382160361374b5760405162461bcd60e51b815260206004820152601760248201527621b0b73737ba103a3930b739b332b9103a379039b2b63360491b6044820152606401610c11565b600180546001600160a01b0319166001600160a01b0383811691821790925560008054604051929316917fed8889f560326eb138920d842192f0eb3dd22b4f139c87a2c57538e05bae12789190a350565b60008260000182815481106137b3576137b3614412565b9060005260206000200154905092915050565b60005a6113888110156137d857600080fd5b6113888103905084604082048203116137f057600080fd5b50823b6137fc57600080fd5b60008083516020850160008789f1949350505050565b600081815260018301602052604081205480156138fb5760006138366001836143e3565b855490915060009061384a906001906143e3565b90508181146138af57600086600001828154811061386a5761386a614412565b906000526020600020015490508087600001848154811061388d5761388d614412565b6000918252602080832090910192909255918252600188019052604090208390555b85548690806138c0576138c0614d44565b6001900381819060005260206000200160009055905585600101600086815260200190815260200160002060009055600193505050506106ac565b60009150506106ac565b6000818152600183016020526040812054612b5390849084908490613956575081546001818101845560008481526020808220909301849055845484825282860190935260409020919091556106ac565b5060006106ac565b6040805160e081018252600080825260208201819052918101829052606081018290526080810182905260a0810182905260c081019190915290565b5080546139a69061452d565b6000825580601f106139b6575050565b601f016020900490600052602060002090810190612b3a9190613aab565b828054828255906000526020600020908101928215613a27579160200282015b82811115613a275781546001600160a01b0319166001600160a01b038435161782556020909201916001909101906139f4565b50613a33929150613aab565b5090565b828054613a439061452d565b90600052602060002090601f016020900481019282613a655760008555613a27565b82601f10613a7e57805160ff1916838001178555613a27565b82800160010185558215613a27579182015b82811115613a27578251825591602001919060010190613a90565b5b80821115613a335760008155600101613aac565b60008060408385031215613ad357600080fd5b50508035926020909101359150565b6020808252825182820181905260009190848201906040850190845b81811015613b1a57835183529284019291840191600101613afe565b50909695505050505050565b60005b83811015613b41578181015183820152602001613b29565b83811115613b50576000848401525b50505050565b60008151808452613b6e816020860160208601613b26565b601f01601f19169290920160200192915050565b602081526000612b536020830184613b56565b6001600160a01b03169052565b805163ffffffff1682526020810151613bc3602084018263ffffffff169052565b506040810151613bda604084018262ffffff169052565b506060810151613bf2606084018263ffffffff169052565b506080810151613c09608084018262ffffff169052565b5060a0810151613c1f60a084018261ffff169052565b5060c0810151613c3a60c08401826001600160601b03169052565b5060e0810151613c5260e084018263ffffffff169052565b506101008181015190830152610120808201519083015261014080820151613c7c82850182613b95565b505061016080820151613b5082850182613b95565b600061022080830163ffffffff8751168452602060018060601b038189015116818601526040880151604086015260608801516060860152613cd66080860188613ba2565b6102008501929092528451908190526102408401918086019160005b81811015613d175783516001600160a01b031685529382019392820192600101613cf2565b509298975050505050505050565b80356001600160a01b0381168114613d3c57600080fd5b919050565b60008060408385031215613d5457600080fd5b613d5d83613d25565b9150602083013560048110613d7157600080fd5b809150509250929050565b6001600160a01b0391909116815260200190565b600060208284031215613da257600080fd5b612b5382613d25565b634e487b7160e01b600052602160045260246000fd5b60018110613dd157613dd1613dab565b9052565b602081016106ac8284613dc1565b60008060408385031215613df657600080fd5b82359150613e0660208401613d25565b90509250929050565b60008083601f840112613e2157600080fd5b5081356001600160401b03811115613e3857600080fd5b602083019150836020828501011115613e5057600080fd5b9250929050565b600080600060408486031215613e6c57600080fd5b8335925060208401356001600160401b03811115613e8957600080fd5b613e9586828701613e0f565b9497909650939450505050565b60008083601f840112613eb457600080fd5b5081356001600160401b03811115613ecb57600080fd5b6020830191508360208260051b8501011115613e5057600080fd5b600080600060408486031215613efb57600080fd5b83356001600160401b03811115613f1157600080fd5b613f1d86828701613ea2565b9094509250613f30905060208501613d25565b90509250925092565b60008060208385031215613f4c57600080fd5b82356001600160401b03811115613f6257600080fd5b613f6e85828601613e0f565b90969095509350505050565b600060208284031215613f8c57600080fd5b5035919050565b6001600160601b0391909116815260200190565b80356001600160601b0381168114613d3c57600080fd5b60008060408385031215613fd157600080fd5b82359150613e0660208401613fa7565b60008060008060608587031215613ff757600080fd5b61400085613d25565b93506020850135925060408501356001600160401b0381111561402257600080fd5b61402e87828801613e0f565b95989497509550505050565b6000806040838503121561404d57600080fd5b61405683613d25565b9150613e0660208401613d25565b803563ffffffff81168114613d3c57600080fd5b6000806040838503121561408b57600080fd5b82359150613e0660208401614064565b600080600080604085870312156140b157600080fd5b84356001600160401b03808211156140c857600080fd5b6140d488838901613ea2565b909650945060208701359150808211156140ed57600080fd5b5061402e87828801613ea2565b60a08152600061410d60a0830188613b56565b90508560208301528460408301528360608301528260808301529695505050505050565b6001600160a01b03898116825263ffffffff89166020830152610100604083018190526000916141638483018b613b56565b6001600160601b03998a16606086015297811660808501529590951660a0830152506001600160401b039290921660c083015290931660e090930192909252949350505050565b6000806000806000608086880312156141c257600080fd5b6141cb86613d25565b94506141d960208701614064565b93506141e760408701613d25565b925060608601356001600160401b0381111561420257600080fd5b61420e88828901613e0f565b969995985093965092949392505050565b634e487b7160e01b600052604160045260246000fd5b60405161018081016001600160401b03811182821017156142585761425861421f565b60405290565b60405160e081016001600160401b03811182821017156142585761425861421f565b604051601f8201601f191681016001600160401b03811182821017156142a8576142a861421f565b604052919050565b803562ffffff81168114613d3c57600080fd5b803561ffff81168114613d3c57600080fd5b600061018082840312156142e857600080fd5b6142f0614235565b6142f983614064565b815261430760208401614064565b6020820152614318604084016142b0565b604082015261432960608401614064565b606082015261433a608084016142b0565b608082015261434b60a084016142c3565b60a082015261435c60c08401613fa7565b60c082015261436d60e08401614064565b60e082015261010083810135908201526101208084013590820152610140614396818501613d25565b908201526101606143a8848201613d25565b908201529392505050565b60208101600483106143c7576143c7613dab565b91905290565b634e487b7160e01b600052601160045260246000fd5b6000828210156143f5576143f56143cd565b500390565b6000821982111561440d5761440d6143cd565b500190565b634e487b7160e01b600052603260045260246000fd5b60006001820161443a5761443a6143cd565b5060010190565b60006001600160601b0383811690831681811015614461576144616143cd565b039392505050565b60006001600160601b0382811684821680830382111561448b5761448b6143cd565b01949350505050565b6001600160601b039290921682526001600160a01b0316602082015260400190565b6001600160a01b039290921682526001600160601b0316602082015260400190565b80518015158114613d3c57600080fd5b6000602082840312156144fa57600080fd5b612b53826144d8565b60208082526010908201526f14185d5cd8589b194e881c185d5cd95960821b604082015260600190565b600181811c9082168061454157607f821691505b60208210810361456157634e487b7160e01b600052602260045260246000fd5b50919050565b600081518084526020808501808196508360051b8101915082860160005b858110156145af57828403895261459d848351613b56565b98850198935090840190600101614585565b5091979650505050505050565b606080825281810185905260009060806001600160fb1b038711156145e057600080fd5b8660051b808983870137808501905081810160008152602083878403018188015281895180845260a093508385019150828b01945060005b818110156146ad57855180516001600160601b03168452848101516001600160a01b039081168686015260408083015163ffffffff1690860152898201516001600160401b03168a86015288820151168885015285810151614684878601826001600160601b03169052565b5060c0908101519061469885820183613b95565b50509483019460e09290920191600101614618565b505087810360408901526146c1818a614567565b9c9b505050505050505050505050565b6000602082840312156146e357600080fd5b815160018110612b5357600080fd5b6146fc8185613dc1565b6147096020820184613dc1565b6060604082015260006116d66060830184613b56565b60006001600160401b038211156147385761473861421f565b50601f01601f191660200190565b600082601f83011261475757600080fd5b815161476a6147658261471f565b614280565b81815284602083860101111561477f57600080fd5b610ce8826020830160208701613b26565b6000602082840312156147a257600080fd5b81516001600160401b038111156147b857600080fd5b610ce884828501614746565b6001600160a01b03929092168252602082015260400190565b60006001600160401b038211156147f6576147f661421f565b5060051b60200190565b600082601f83011261481157600080fd5b81356020614821614765836147dd565b82815260e0928302850182019282820191908785111561484057600080fd5b8387015b858110156148ef5781818a03121561485c5760008081fd5b61486461425e565b61486d82613fa7565b815261487a868301613d25565b86820152604061488b818401614064565b908201526060828101356001600160401b03811681146148ab5760008081fd5b9082015260806148bc838201613d25565b9082015260a06148cd838201613fa7565b9082015260c06148de838201613d25565b908201528452928401928101614844565b5090979650505050505050565b600082601f83011261490d57600080fd5b8135602061491d614765836147dd565b82815260059290921b8401810191818101908684111561493c57600080fd5b8286015b848110156149ba5780356001600160401b0381111561495f5760008081fd5b8701603f810189136149715760008081fd5b8481013560406149836147658361471f565b8281528b828486010111156149985760008081fd5b8282850189830137600092810188019290925250845250918301918301614940565b509695505050505050565b6000806000606084860312156149da57600080fd5b83356001600160401b03808211156149f157600080fd5b818601915086601f830112614a0557600080fd5b81356020614a15614765836147dd565b82815260059290921b8401810191818101908a841115614a3457600080fd5b948201945b83861015614a5257853582529482019490820190614a39565b97505087013592505080821115614a6857600080fd5b614a7487838801614800565b93506040860135915080821115614a8a57600080fd5b50614a97868287016148fc565b9150509250925092565b600060208284031215614ab357600080fd5b5051919050565b8183526000602080850194508260005b85811015614af6576001600160a01b03614ae383613d25565b1687529582019590820190600101614aca565b509495945050505050565b604081526000614b15604083018688614aba565b8281036020840152614b28818587614aba565b979650505050505050565b600060208083526000845481600182811c915080831680614b5557607f831692505b8583108103614b7257634e487b7160e01b85526022600452602485fd5b878601838152602001818015614b8f5760018114614ba057614bcb565b60ff19861682528782019650614bcb565b60008b81526020902060005b86811015614bc557815484820152908501908901614bac565b83019750505b50949998505050505050505050565b60008251614bec818460208701613b26565b9190910192915050565b60008060408385031215614c0957600080fd5b614c12836144d8565b915060208301516001600160401b03811115614c2d57600080fd5b614c3985828601614746565b9150509250929050565b600063ffffffff808316818103614c5c57614c5c6143cd565b6001019392505050565b61018081016106ac8284613ba2565b6001600160601b0383168152604060208201819052600090610ce890830184613b56565b805169ffffffffffffffffffff81168114613d3c57600080fd5b600080600080600060a08688031215614ccb57600080fd5b614cd486614c99565b9450602086015193506040860151925060608601519150614cf760808701614c99565b90509295509295909350565b6000816000190483118215151615614d1d57614d1d6143cd565b500290565b600082614d3f57634e487b7160e01b600052601260045260246000fd5b500490565b634e487b7160e01b600052603160045260246000fdfea2646970667358221220be603f5a0a5092046a5f16d5d4e84a057f6772597853c7e76218cc44c52994f264736f6c634300080d0033")]
    contract KeeperRegistry {
        enum MigrationPermission {
            NONE,
            OUTGOING,
            INCOMING,
            BIDIRECTIONAL
        }

        struct Config {
            uint32 paymentPremiumPPB;
            uint32 flatFeeMicroLink;
            uint24 blockCountPerTurn;
            uint32 checkGasLimit;
            uint24 stalenessSeconds;
            uint16 gasCeilingMultiplier;
            uint96 minUpkeepSpend;
            uint32 maxPerformGas;
            uint256 fallbackGasPrice;
            uint256 fallbackLinkPrice;
            address transcoder;
            address registrar;
        }

        struct State {
            uint32 nonce;
            uint96 ownerLinkBalance;
            uint256 expectedLinkBalance;
            uint256 numUpkeeps;
        }

        error ArrayHasNoEntries();
        error CannotCancel();
        error DuplicateEntry();
        error GasLimitCanOnlyIncrease();
        error GasLimitOutsideRange();
        error IndexOutOfRange();
        error InsufficientFunds();
        error InvalidDataLength();
        error InvalidPayee();
        error InvalidRecipient();
        error KeepersMustTakeTurns();
        error MigrationNotPermitted();
        error NotAContract();
        error OnlyActiveKeepers();
        error OnlyCallableByAdmin();
        error OnlyCallableByLINKToken();
        error OnlyCallableByOwnerOrAdmin();
        error OnlyCallableByOwnerOrRegistrar();
        error OnlyCallableByPayee();
        error OnlyCallableByProposedPayee();
        error OnlySimulatedBackend();
        error ParameterLengthError();
        error PaymentGreaterThanAllLINK();
        error TargetCheckReverted(bytes reason);
        error TranscoderNotSet();
        error UpkeepNotActive();
        error UpkeepNotCanceled();
        error UpkeepNotNeeded();
        error ValueNotChanged();

        event ConfigSet(Config config);
        event FundsAdded(uint256 indexed id, address indexed from, uint96 amount);
        event FundsWithdrawn(uint256 indexed id, uint256 amount, address to);
        event KeepersUpdated(address[] keepers, address[] payees);
        event OwnerFundsWithdrawn(uint96 amount);
        event OwnershipTransferRequested(address indexed from, address indexed to);
        event OwnershipTransferred(address indexed from, address indexed to);
        event Paused(address account);
        event PayeeshipTransferRequested(address indexed keeper, address indexed from, address indexed to);
        event PayeeshipTransferred(address indexed keeper, address indexed from, address indexed to);
        event PaymentWithdrawn(address indexed keeper, uint256 indexed amount, address indexed to, address payee);
        event Unpaused(address account);
        event UpkeepCanceled(uint256 indexed id, uint64 indexed atBlockHeight);
        event UpkeepGasLimitSet(uint256 indexed id, uint96 gasLimit);
        event UpkeepMigrated(uint256 indexed id, uint256 remainingBalance, address destination);
        event UpkeepPerformed(uint256 indexed id, bool indexed success, address indexed from, uint96 payment, bytes performData);
        event UpkeepReceived(uint256 indexed id, uint256 startingBalance, address importedFrom);
        event UpkeepRegistered(uint256 indexed id, uint32 executeGas, address admin);

        constructor(address link, address linkEthFeed, address fastGasFeed, Config memory config);

        function FAST_GAS_FEED() external view returns (address);
        function LINK() external view returns (address);
        function LINK_ETH_FEED() external view returns (address);
        function acceptOwnership() external;
        function acceptPayeeship(address keeper) external;
        function addFunds(uint256 id, uint96 amount) external;
        function cancelUpkeep(uint256 id) external;
        function checkUpkeep(uint256 id, address from)
            external
            returns (
                bytes memory performData,
                uint256 maxLinkPayment,
                uint256 gasLimit,
                uint256 adjustedGasWei,
                uint256 linkEth
            );
        function getActiveUpkeepIDs(uint256 startIndex, uint256 maxCount) external view returns (uint256[] memory);
        function getKeeperInfo(address query) external view returns (address payee, bool active, uint96 balance);
        function getMaxPaymentForGas(uint256 gasLimit) external view returns (uint96 maxPayment);
        function getMinBalanceForUpkeep(uint256 id) external view returns (uint96 minBalance);
        function getPeerRegistryMigrationPermission(address peer) external view returns (MigrationPermission);
        function getState()
            external
            view
            returns (State memory state, Config memory config, address[] memory keepers);
        function getUpkeep(uint256 id)
            external
            view
            returns (
                address target,
                uint32 executeGas,
                bytes memory checkData,
                uint96 balance,
                address lastKeeper,
                address admin,
                uint64 maxValidBlocknumber,
                uint96 amountSpent
            );
        function migrateUpkeeps(uint256[] calldata ids, address destination) external;
        function onTokenTransfer(address sender, uint256 amount, bytes calldata data) external;
        function owner() external view returns (address);
        function pause() external;
        function paused() external view returns (bool);
        function performUpkeep(uint256 id, bytes calldata performData) external returns (bool success);
        function receiveUpkeeps(bytes calldata encodedUpkeeps) external;
        function recoverFunds() external;
        function registerUpkeep(address target, uint32 gasLimit, address admin, bytes calldata checkData) external returns (uint256 id);
        function setConfig(Config memory config) external;
        function setKeepers(address[] calldata keepers, address[] calldata payees) external;
        function setPeerRegistryMigrationPermission(address peer, MigrationPermission permission) external;
        function setUpkeepGasLimit(uint256 id, uint32 gasLimit) external;
        function transferOwnership(address to) external;
        function transferPayeeship(address keeper, address proposed) external;
        function typeAndVersion() external view returns (string memory);
        function unpause() external;
        function upkeepTranscoderVersion() external view returns (uint8);
        function withdrawFunds(uint256 id, address to) external;
        function withdrawOwnerFunds() external;
        function withdrawPayment(address from, address to) external;
    }
}
